use std::fs;
use std::io::Write;
use std::path::PathBuf;
use std::process::{Command, Output, Stdio};

const CARS: &str = "km,price\n240000,3650\n139800,3800\n150500,4400\n185530,4450\n176000,5250\n\
114800,5350\n166800,5800\n89000,5990\n144500,5999\n84000,6200\n82029,6390\n63060,6390\n\
74000,6600\n97500,6800\n67000,6800\n76025,6900\n48235,6900\n93000,6990\n60949,7490\n\
65674,7555\n54000,7990\n68500,7990\n22899,7990\n61789,8290\n";

fn scratch(name: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("carprice-cli-{}-{}", name, std::process::id()));
    fs::create_dir_all(&dir).unwrap();
    dir
}

fn run(bin: &str, args: &[&str], stdin: &str) -> Output {
    let mut child = Command::new(bin)
        .args(args)
        .env("RUST_LOG", "warn")
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .unwrap();
    child
        .stdin
        .take()
        .unwrap()
        .write_all(stdin.as_bytes())
        .unwrap();
    child.wait_with_output().unwrap()
}

#[test]
fn train_predict_score() {
    let dir = scratch("pipeline");
    let data = dir.join("data.csv");
    let model = dir.join("models").join("model.json");
    fs::write(&data, CARS).unwrap();

    let out = run(
        env!("CARGO_BIN_EXE_train"),
        &[
            "--data-file",
            data.to_str().unwrap(),
            "--save",
            model.to_str().unwrap(),
            "--learning-rate",
            "0.05",
        ],
        "",
    );
    assert!(out.status.success(), "{}", String::from_utf8_lossy(&out.stderr));
    assert!(model.exists());
    let stdout = String::from_utf8_lossy(&out.stdout);
    assert!(stdout.contains("converged"));

    let out = run(
        env!("CARGO_BIN_EXE_predict"),
        &["--model-file", model.to_str().unwrap()],
        "50000\nnot a number\nexit\n",
    );
    assert!(out.status.success());
    let stdout = String::from_utf8_lossy(&out.stdout);
    assert!(stdout.contains("theta0"));
    assert!(stdout.contains("Predicted price"));
    assert!(stdout.contains("is not a number"));

    for stats in &["dataset", "model"] {
        let out = run(
            env!("CARGO_BIN_EXE_score"),
            &[
                "--model-file",
                model.to_str().unwrap(),
                "--data-file",
                data.to_str().unwrap(),
                "--stats",
                stats,
            ],
            "",
        );
        assert!(out.status.success());
        let stdout = String::from_utf8_lossy(&out.stdout);
        assert!(stdout.contains("R² score: 0.7"));
        assert!(stdout.contains("decent fit"));
    }

    let _ = fs::remove_dir_all(dir);
}

#[test]
fn load_failures_exit_with_one() {
    let dir = scratch("failures");
    let missing_data = dir.join("missing.csv");
    let missing_model = dir.join("missing.json");
    let malformed = dir.join("malformed.csv");
    fs::write(&malformed, "km,price\n1000,abc\n2000,3000\n").unwrap();

    let out = run(
        env!("CARGO_BIN_EXE_train"),
        &["--data-file", missing_data.to_str().unwrap(), "--no-save"],
        "",
    );
    assert_eq!(out.status.code(), Some(1));

    let out = run(
        env!("CARGO_BIN_EXE_train"),
        &["--data-file", malformed.to_str().unwrap(), "--no-save"],
        "",
    );
    assert_eq!(out.status.code(), Some(1));

    let diverged_model = dir.join("diverged.json");
    fs::write(dir.join("data.csv"), CARS).unwrap();
    let out = run(
        env!("CARGO_BIN_EXE_train"),
        &[
            "--data-file",
            dir.join("data.csv").to_str().unwrap(),
            "--save",
            diverged_model.to_str().unwrap(),
            "--learning-rate",
            "5",
        ],
        "",
    );
    assert_eq!(out.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&out.stderr).contains("diverged"));
    assert!(!diverged_model.exists());

    let out = run(
        env!("CARGO_BIN_EXE_predict"),
        &["--model-file", missing_model.to_str().unwrap()],
        "",
    );
    assert_eq!(out.status.code(), Some(1));

    let out = run(
        env!("CARGO_BIN_EXE_score"),
        &["--model-file", missing_model.to_str().unwrap()],
        "",
    );
    assert_eq!(out.status.code(), Some(1));

    let _ = fs::remove_dir_all(dir);
}

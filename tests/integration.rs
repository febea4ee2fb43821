use assert_cmd::Command;
use predicates::boolean::PredicateBooleanExt;
use predicates::str::contains;

const BINARY_NAME: &str = "mirrorboard";

#[test]
fn startup_info() {
    let mut cmd = Command::cargo_bin(BINARY_NAME).expect("Binary should be built");

    drop(
        cmd.write_stdin("quit\n")
            .assert()
            .success()
            .stdout(contains("Mirrorboard").and(contains("Release build"))),
    );
}

#[test]
fn starting_moves() {
    let mut cmd = Command::cargo_bin(BINARY_NAME).expect("Binary should be built");

    drop(
        cmd.write_stdin("moves E2\nmoves G8\nfen\nquit\n")
            .assert()
            .success()
            .stdout(
                contains("E4 E3\n")
                    .and(contains("H6 F6\n"))
                    .and(contains("RNBKQBNR/PPPPPPPP/8/8/8/8/pppppppp/rnbkqbnr\n")),
            ),
    );
}

#[test]
fn empty_setup() {
    let mut cmd = Command::cargo_bin(BINARY_NAME).expect("Binary should be built");
    let _ = cmd.args(["--setup", "empty"]);

    drop(
        cmd.write_stdin("put C5 P\nmoves C5\nmoves C4\n")
            .assert()
            .success()
            .stdout(contains("C3 C4\n").and(contains("info string no piece on C4"))),
    );
}

#[test]
fn placement_argument() {
    let mut cmd = Command::cargo_bin(BINARY_NAME).expect("Binary should be built");
    let _ = cmd.args(["--placement", "8/8/8/8/8/3N1B2/4p3/8"]);

    drop(
        cmd.write_stdin("moves E2\n")
            .assert()
            .success()
            .stdout(contains("E4 E3 F3 D3\n")),
    );
}

#[test]
fn invalid_placement_argument() {
    let mut cmd = Command::cargo_bin(BINARY_NAME).expect("Binary should be built");
    let _ = cmd.args(["--placement", "8/8/8"]);

    drop(
        cmd.assert()
            .failure()
            .stderr(contains("parsing --placement").and(contains("expected 8 ranks"))),
    );
}

use assert_cmd::Command;

pub fn bodylog_cmd() -> Command {
    let mut cmd = Command::cargo_bin("bodylog").unwrap();
    cmd.env_remove("BODYLOG_ROOT");
    cmd
}

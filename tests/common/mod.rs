use assert_cmd::Command;

pub const ENV_VARS: [&str; 3] = [
    "ASSISTANT_DATA_DIR",
    "ASSISTANT_CONTACTS_FILE",
    "ASSISTANT_NOTES_FILE",
];

pub fn assistant_cmd() -> Command {
    let mut cmd = Command::cargo_bin("assistant").unwrap();
    for var in ENV_VARS {
        cmd.env_remove(var);
    }
    cmd.env_remove("RUST_LOG");
    cmd
}

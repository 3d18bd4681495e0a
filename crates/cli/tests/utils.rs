#![cfg(unix)]
#![allow(dead_code)]

use starbase_sandbox::{assert_cmd, Sandbox};
use std::fs;
use std::os::unix::fs::PermissionsExt;
use std::path::PathBuf;

// These tests drive the real binary with a fake launcher on PATH, so they
// are only reliable where executable bits can be controlled.

pub fn create_fake_command(sandbox: &Sandbox, relative: &str) -> PathBuf {
    sandbox.create_file(relative, "#!/bin/sh\nexit 0\n");

    let path = sandbox.path().join(relative);
    fs::set_permissions(&path, fs::Permissions::from_mode(0o755)).unwrap();

    path
}

pub fn create_jkernel_command(sandbox: &Sandbox) -> assert_cmd::Command {
    let home_dir = sandbox.path().join(".home");
    fs::create_dir_all(&home_dir).unwrap();

    let mut cmd = assert_cmd::Command::cargo_bin("jkernel").unwrap();
    cmd.current_dir(sandbox.path());
    cmd.env_remove("COLAB_JUPYTER_TRANSPORT");
    cmd.env("HOME", home_dir);
    cmd.env("PATH", sandbox.path().join("bin"));
    cmd.env("NO_COLOR", "1");
    cmd.env("JKERNEL_TEST", "true");
    cmd
}

pub fn kernels_dir(sandbox: &Sandbox) -> PathBuf {
    sandbox.path().join("kernels")
}

pub fn read_kernel_json(sandbox: &Sandbox, kernel_dir: &str) -> serde_json::Value {
    let path = kernels_dir(sandbox).join(kernel_dir).join("kernel.json");

    serde_json::from_str(&fs::read_to_string(path).unwrap()).unwrap()
}

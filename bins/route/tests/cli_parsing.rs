//! CLI argument parsing tests for the route command.
//!
//! These tests only exercise paths that fail before the kernel is asked to
//! change anything, so they run without root privileges.

use assert_cmd::Command;
use predicates::prelude::*;

fn route_cmd() -> Command {
    Command::new(env!("CARGO_BIN_EXE_route"))
}

mod global_flags {
    use super::*;

    #[test]
    fn test_help() {
        route_cmd()
            .arg("--help")
            .assert()
            .success()
            .stdout(predicate::str::contains("IPv6 routing table"));
    }

    #[test]
    fn test_version() {
        route_cmd()
            .arg("--version")
            .assert()
            .success()
            .stdout(predicate::str::contains("route"));
    }

    #[test]
    fn test_no_subcommand_prints_usage() {
        route_cmd()
            .assert()
            .success()
            .stdout(predicate::str::contains("route add TARGET"));
    }
}

mod add_command {
    use super::*;

    #[test]
    fn test_add_requires_target() {
        route_cmd()
            .arg("add")
            .assert()
            .failure()
            .code(2)
            .stderr(predicate::str::contains("Usage:"));
    }

    #[test]
    fn test_add_prefix_out_of_range() {
        route_cmd()
            .args(["add", "fe80::1/200"])
            .assert()
            .failure()
            .code(2)
            .stderr(predicate::str::contains("prefix length"));
    }

    #[test]
    fn test_add_prefix_not_numeric() {
        route_cmd()
            .args(["add", "fe80::1/abc"])
            .assert()
            .failure()
            .code(2);
    }

    #[test]
    fn test_add_metric_not_numeric() {
        route_cmd()
            .args(["add", "default", "metric", "fast"])
            .assert()
            .failure()
            .code(2)
            .stderr(predicate::str::contains("metric"));
    }

    #[test]
    fn test_add_metric_missing_value() {
        route_cmd()
            .args(["add", "default", "metric"])
            .assert()
            .failure()
            .code(2);
    }

    #[test]
    fn test_add_duplicate_gateway() {
        route_cmd()
            .args(["add", "default", "gw", "fe80::1", "gw", "fe80::2"])
            .assert()
            .failure()
            .code(2)
            .stderr(predicate::str::contains("gateway"));
    }

    #[test]
    fn test_add_gw_missing_address() {
        route_cmd()
            .args(["add", "default", "gw"])
            .assert()
            .failure()
            .code(2);
    }

    #[test]
    fn test_add_dev_missing_name() {
        route_cmd()
            .args(["add", "default", "dev"])
            .assert()
            .failure()
            .code(2);
    }

    #[test]
    fn test_add_bare_token_followed_by_more() {
        route_cmd()
            .args(["add", "default", "eth0", "metric", "5"])
            .assert()
            .failure()
            .code(2)
            .stderr(predicate::str::contains("unrecognized token"));
    }
}

mod del_command {
    use super::*;

    #[test]
    fn test_del_requires_target() {
        route_cmd().arg("del").assert().failure().code(2);
    }

    #[test]
    fn test_del_prefix_out_of_range() {
        route_cmd()
            .args(["del", "2001:db8::/129"])
            .assert()
            .failure()
            .code(2);
    }
}

mod flush_command {
    use super::*;

    #[test]
    fn test_flush_not_supported() {
        route_cmd()
            .arg("flush")
            .assert()
            .failure()
            .code(2)
            .stderr(predicate::str::contains("not supported"));
    }
}

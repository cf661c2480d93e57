//! Property-based tests for the resolver's derived values.
//!
//! These tests use proptest to generate random field values and verify that
//! the derivation rules hold for all of them.

#[cfg(test)]
mod proptest_tests {
    use crate::loader::Document;
    use crate::Resolver;
    use proptest::prelude::*;
    use serde_yaml::{Mapping, Value};

    fn resolver_for(user: &str, path: &str, version: &str) -> Resolver {
        let mut map = Mapping::new();
        map.insert(Value::from("deploy_user"), Value::from(user));
        map.insert(Value::from("deploy_path"), Value::from(path));
        map.insert(Value::from("app_version"), Value::from(version));
        Resolver::from_document(Document::Mapping(map)).unwrap()
    }

    // ============================================================================
    // install_path property tests
    // ============================================================================

    proptest! {
        /// Property: install_path is the literal concatenation, separators included
        #[test]
        fn install_path_is_literal_concatenation(
            path in "(/[a-z0-9_.-]{0,8}){0,4}/?",
            version in "[0-9]{1,3}\\.[0-9]{1,3}\\.[0-9]{1,3}",
        ) {
            let r = resolver_for("deploy", &path, &version);
            prop_assert_eq!(r.install_path(), format!("{}/{}", path, version));
        }

        /// Property: install_path is deterministic
        #[test]
        fn install_path_is_deterministic(path in ".*", version in ".*") {
            let r = resolver_for("deploy", &path, &version);
            prop_assert_eq!(r.install_path(), r.install_path());
        }
    }

    // ============================================================================
    // login and archive property tests
    // ============================================================================

    proptest! {
        /// Property: deploy_user_at_host is user + "@" + host for any non-empty host
        #[test]
        fn login_is_user_at_host(user in "[a-z_][a-z0-9_-]{0,15}", host in ".+") {
            let r = resolver_for(&user, "/srv", "1.0.0");
            prop_assert_eq!(r.deploy_user_at_host(&host), format!("{}@{}", r.deploy_user(), host));
        }

        /// Property: the archive name wraps the version verbatim
        #[test]
        fn archive_wraps_version(version in ".*") {
            let r = resolver_for("deploy", "/srv", &version);
            let archive = r.archive_file_name();
            prop_assert!(archive.starts_with("crypti-linux-"));
            prop_assert!(archive.ends_with(".zip"));
            prop_assert_eq!(archive, format!("crypti-linux-{}.zip", version));
        }

        /// Property: catalogs do not depend on the configuration
        #[test]
        fn catalogs_are_constant(user in ".*", version in ".*") {
            let a = resolver_for(&user, "/a", &version);
            let b = resolver_for("deploy", "/b", "1.0.0");
            prop_assert_eq!(a.os_package_conflicts(), b.os_package_conflicts());
            prop_assert_eq!(a.os_package_dependencies(), b.os_package_dependencies());
            prop_assert_eq!(a.side_tool_dependencies(), b.side_tool_dependencies());
        }
    }
}

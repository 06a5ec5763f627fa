//! Property tests for kitdeploy.
//!
//! Properties use randomized input generation to explore edge cases in the
//! per-directory values and the commands rendered from them.
//!
//! Run with: `cargo test --test properties`

use std::path::PathBuf;

use proptest::prelude::*;

use kitdeploy::{DeployConfig, DeviceCommand, DeviceKind, DeviceProfile, DirectoryContext};

fn dir_name() -> impl Strategy<Value = String> {
    proptest::string::string_regex("[A-Za-z0-9_-][A-Za-z0-9._-]{0,15}")
        .unwrap()
        .prop_filter("not a relative component", |s| s != "." && s != "..")
}

fn remote_root() -> impl Strategy<Value = String> {
    let segment = proptest::string::string_regex("[a-z0-9_]{1,8}").unwrap();
    (proptest::collection::vec(segment, 1..=3), any::<bool>()).prop_map(|(segments, slash)| {
        let root = format!("/{}", segments.join("/"));
        if slash {
            format!("{}/", root)
        } else {
            root
        }
    })
}

fn device_kind() -> impl Strategy<Value = DeviceKind> {
    prop_oneof![Just(DeviceKind::Android), Just(DeviceKind::Mic)]
}

fn config(kind: DeviceKind, root: &str) -> DeployConfig {
    DeployConfig {
        remote_root: root.to_string(),
        cmd_prefix: String::new(),
        device_kind: kind,
        device_id: "dev0".to_string(),
        target_arch: "ia32".to_string(),
    }
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: archive name and remote path derive only from the basename.
    #[test]
    fn property_context_derives_from_basename(
        parents in proptest::collection::vec(dir_name(), 0..=3),
        name in dir_name(),
        root in remote_root(),
    ) {
        let mut dir: PathBuf = parents.iter().collect();
        dir.push(&name);

        let ctx = DirectoryContext::new(&dir, &root).unwrap();

        prop_assert_eq!(ctx.archive_name(), format!("{}.tar.bz2", name));
        prop_assert_eq!(
            ctx.remote_path(),
            format!("{}/source/tools/{}", root.trim_end_matches('/'), name)
        );
        prop_assert!(!ctx.remote_path().contains("//"));
    }

    /// PROPERTY: every operation a profile supports renders, and each
    /// rendered command targets the directory it was rendered for.
    #[test]
    fn property_supported_commands_render_for_their_directory(
        kind in device_kind(),
        name in dir_name(),
        root in remote_root(),
    ) {
        let profile = DeviceProfile::resolve(&config(kind, &root));
        let ctx = DirectoryContext::new(&PathBuf::from("build").join(&name), &root).unwrap();

        for command in [
            DeviceCommand::Mkdir,
            DeviceCommand::Rmdir,
            DeviceCommand::Extract,
            DeviceCommand::Push,
        ] {
            let rendered = profile.render(&command, &ctx);
            prop_assert_eq!(rendered.is_ok(), profile.supports(&command));
            if let Ok(invocation) = rendered {
                prop_assert!(
                    invocation
                        .arguments()
                        .iter()
                        .any(|a| a.to_string_lossy().contains(ctx.remote_path())),
                    "{} does not target {}", invocation, ctx.remote_path()
                );
            }
        }
    }
}

use jkernel_core::{
    assemble_descriptor, assemble_launch_command, default_display_name, KernelVariant,
    CONNECTION_FILE_TOKEN, INTERRUPT_MODE,
};
use std::path::Path;

mod assemble_launch_command {
    use super::*;

    #[test]
    fn orders_arguments_for_default_variant() {
        let variant = KernelVariant::IJava.resolve();
        let argv = assemble_launch_command(&variant, Path::new("/usr/local/bin/jbang"));

        assert_eq!(
            argv,
            vec![
                "/usr/local/bin/jbang",
                "--java",
                "11+",
                "-R--add-opens",
                "-Rjava.base/jdk.internal.misc=ALL-UNNAMED",
                "-R--illegal-access=permit",
                "com.github.waikato.thirdparty:ijava:1.3.0",
                "{connection_file}",
            ]
        );
    }

    #[test]
    fn includes_entry_point_after_java_version() {
        let variant = KernelVariant::Kotlin.resolve();
        let argv = assemble_launch_command(&variant, Path::new("/bin/jbang"));

        let position = argv.iter().position(|arg| arg == "-m").unwrap();

        assert_eq!(argv[position - 1], "11");
        assert_eq!(argv[position + 1], "org.jetbrains.kotlinx.jupyter.IkotlinKt");
    }

    #[test]
    fn joins_forwarded_modules_with_comma() {
        let variant = KernelVariant::Rapaio.resolve();
        let argv = assemble_launch_command(&variant, Path::new("/bin/jbang"));

        let position = argv.iter().position(|arg| arg == "-R--add-modules").unwrap();

        assert_eq!(argv[position + 1], "-Rjava.base,jdk.incubator.vector");
    }

    #[test]
    fn keeps_connection_file_token_unexpanded_and_trailing() {
        for variant in KernelVariant::ALL {
            let argv = assemble_launch_command(&variant.resolve(), Path::new("/bin/jbang"));
            let count = argv
                .iter()
                .filter(|arg| arg.as_str() == CONNECTION_FILE_TOKEN)
                .count();

            assert_eq!(count, 1, "{variant} argv must contain the token exactly once");
            assert_eq!(
                argv.last().map(String::as_str),
                Some(CONNECTION_FILE_TOKEN),
                "{variant} argv must end with the token"
            );
        }
    }

    #[test]
    fn same_inputs_yield_identical_argv() {
        for variant in KernelVariant::ALL {
            let resolved = variant.resolve();

            assert_eq!(
                assemble_launch_command(&resolved, Path::new("/bin/jbang")),
                assemble_launch_command(&resolved, Path::new("/bin/jbang")),
            );
        }
    }
}

mod display_name {
    use super::*;

    #[test]
    fn formats_language_and_short_name() {
        assert_eq!(
            default_display_name(&KernelVariant::IJava.resolve()),
            "java (IJava/j!)"
        );
        assert_eq!(
            default_display_name(&KernelVariant::Kotlin.resolve()),
            "kotlin (Kotlin/j!)"
        );
    }
}

mod assemble_descriptor {
    use super::*;

    #[test]
    fn builds_complete_descriptor() {
        let variant = KernelVariant::Rapaio.resolve();
        let descriptor = assemble_descriptor(
            &variant,
            Path::new("/bin/jbang"),
            "java (Rapaio/j!)".into(),
            "jbang-rapaio".into(),
            "--enable-preview",
            5000,
        );

        assert_eq!(descriptor.display_name, "java (Rapaio/j!)");
        assert_eq!(descriptor.language, "java");
        assert_eq!(descriptor.interrupt_mode, INTERRUPT_MODE);
        assert_eq!(descriptor.kernel_dir, "jbang-rapaio");
        assert_eq!(
            descriptor.env.get("RJK_TIMEOUT_MILLIS").map(String::as_str),
            Some("5000")
        );
        assert!(descriptor.resources.is_empty());
    }

    #[test]
    fn env_stays_empty_for_variants_without_options() {
        let variant = KernelVariant::Ganymede.resolve();
        let descriptor = assemble_descriptor(
            &variant,
            Path::new("/bin/jbang"),
            "java (Ganymede/j!)".into(),
            "jbang-ganymede".into(),
            "",
            -1,
        );

        assert!(descriptor.env.is_empty());
    }
}

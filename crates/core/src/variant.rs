use crate::descriptor::CONNECTION_FILE_TOKEN;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::fmt;

pub const DEFAULT_LANGUAGE: &str = "java";

// "RELEASE" is the Maven token for the latest published version.
const DEFAULT_VERSION: &str = "RELEASE";
const DEFAULT_JAVA_VERSION: &str = "11+";
const DEFAULT_ARGUMENTS: &[&str] = &[CONNECTION_FILE_TOKEN];
const DEFAULT_JVM_ARGS: &[&str] = &[
    "--add-opens",
    "java.base/jdk.internal.misc=ALL-UNNAMED",
    "--illegal-access=permit",
];

type EnvOptionsFn = fn(&str, i64) -> IndexMap<String, String>;

/// The closed set of supported JVM based kernel flavors.
#[derive(Clone, Copy, Debug, Deserialize, Eq, Hash, PartialEq, Serialize)]
#[cfg_attr(feature = "clap", derive(clap::ValueEnum))]
#[serde(rename_all = "lowercase")]
pub enum KernelVariant {
    #[cfg_attr(feature = "clap", value(name = "ijava"))]
    IJava,
    #[cfg_attr(feature = "clap", value(name = "rapaio"))]
    Rapaio,
    #[cfg_attr(feature = "clap", value(name = "ganymede"))]
    Ganymede,
    #[cfg_attr(feature = "clap", value(name = "kotlin"))]
    Kotlin,
}

/// Per-variant field overrides. Every attribute can be overridden
/// independently; anything left as `None` falls back to the shared
/// default during [`KernelVariant::resolve`].
#[derive(Debug, Default)]
struct VariantOverrides {
    short_name: Option<&'static str>,
    version: Option<&'static str>,
    java_version: Option<&'static str>,
    main_class: Option<&'static str>,
    language: Option<&'static str>,
    modules: Option<&'static [&'static str]>,
    jvm_args: Option<&'static [&'static str]>,
    arguments: Option<&'static [&'static str]>,
    env_options: Option<EnvOptionsFn>,
    info_url: Option<&'static str>,
}

/// A variant with every attribute fully determined, either from the
/// shared defaults or a per-variant override.
#[derive(Clone, Debug)]
pub struct ResolvedVariant {
    pub id: KernelVariant,
    pub short_name: String,
    pub artifact: String,
    pub version: String,
    pub java_version: String,
    pub main_class: Option<String>,
    pub language: String,
    pub modules: Vec<String>,
    pub jvm_args: Vec<String>,
    pub arguments: Vec<String>,
    pub info_url: Option<String>,
    options: Option<EnvOptionsFn>,
}

impl KernelVariant {
    pub const ALL: [KernelVariant; 4] = [
        Self::IJava,
        Self::Rapaio,
        Self::Ganymede,
        Self::Kotlin,
    ];

    /// Lowercase identifier, also used for the default `jbang-<id>`
    /// kernel sub directory name.
    pub fn id(&self) -> &'static str {
        match self {
            Self::IJava => "ijava",
            Self::Rapaio => "rapaio",
            Self::Ganymede => "ganymede",
            Self::Kotlin => "kotlin",
        }
    }

    /// The `group:artifact` Maven coordinate. Required per variant,
    /// there is no shared default.
    pub fn artifact(&self) -> &'static str {
        match self {
            Self::IJava => "com.github.waikato.thirdparty:ijava",
            Self::Rapaio => "io.github.padreati:rapaio-jupyter-kernel",
            Self::Ganymede => "dev.hcf.ganymede:ganymede",
            Self::Kotlin => "org.jetbrains.kotlinx:kotlin-jupyter-kernel-shadowed",
        }
    }

    fn overrides(&self) -> VariantOverrides {
        match self {
            Self::IJava => VariantOverrides {
                short_name: Some("IJava"),
                version: Some("1.3.0"),
                info_url: Some("https://github.com/SpencerPark/IJava"),
                ..VariantOverrides::default()
            },
            Self::Rapaio => VariantOverrides {
                short_name: Some("Rapaio"),
                version: Some("1.3.0"),
                java_version: Some("21"),
                modules: Some(&["java.base", "jdk.incubator.vector"]),
                env_options: Some(rapaio_env_options),
                info_url: Some("https://github.com/padreati/rapaio-jupyter-kernel"),
                ..VariantOverrides::default()
            },
            Self::Ganymede => VariantOverrides {
                short_name: Some("Ganymede"),
                version: Some("2.1.2.20230910"),
                java_version: Some("11"),
                // Matches Ganymede's own installer
                arguments: Some(&["-f", CONNECTION_FILE_TOKEN]),
                info_url: Some("https://github.com/allen-ball/ganymede"),
                ..VariantOverrides::default()
            },
            // Requires jbang >= 0.133 for %{deps:gav} expansion
            Self::Kotlin => VariantOverrides {
                short_name: Some("Kotlin"),
                version: Some("0.12.0-93"),
                java_version: Some("11"),
                main_class: Some("org.jetbrains.kotlinx.jupyter.IkotlinKt"),
                language: Some("kotlin"),
                arguments: Some(&[
                    "-cp=%{deps:org.jetbrains.kotlinx:kotlin-jupyter-lib:0.12.0-85}",
                    CONNECTION_FILE_TOKEN,
                ]),
                ..VariantOverrides::default()
            },
        }
    }

    /// Compose the shared defaults with this variant's overrides into a
    /// fully determined record. Pure and deterministic.
    pub fn resolve(&self) -> ResolvedVariant {
        let overrides = self.overrides();

        ResolvedVariant {
            id: *self,
            short_name: overrides
                .short_name
                .map(str::to_owned)
                .unwrap_or_else(|| capitalize(self.id())),
            artifact: self.artifact().to_owned(),
            version: overrides.version.unwrap_or(DEFAULT_VERSION).to_owned(),
            java_version: overrides
                .java_version
                .unwrap_or(DEFAULT_JAVA_VERSION)
                .to_owned(),
            main_class: overrides.main_class.map(str::to_owned),
            language: overrides.language.unwrap_or(DEFAULT_LANGUAGE).to_owned(),
            modules: to_string_vec(overrides.modules.unwrap_or(&[])),
            jvm_args: to_string_vec(overrides.jvm_args.unwrap_or(DEFAULT_JVM_ARGS)),
            arguments: to_string_vec(overrides.arguments.unwrap_or(DEFAULT_ARGUMENTS)),
            info_url: overrides.info_url.map(str::to_owned),
            options: overrides.env_options,
        }
    }
}

impl fmt::Display for KernelVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.id())
    }
}

impl ResolvedVariant {
    /// Fully qualified `group:artifact:version` coordinate.
    pub fn coordinate(&self) -> String {
        format!("{}:{}", self.artifact, self.version)
    }

    /// Environment options to embed in the descriptor. Variant-supplied
    /// keys take precedence over the (empty) generic default.
    pub fn env_options(
        &self,
        compiler_options: &str,
        timeout_millis: i64,
    ) -> IndexMap<String, String> {
        match self.options {
            Some(options) => options(compiler_options, timeout_millis),
            None => IndexMap::new(),
        }
    }
}

fn rapaio_env_options(compiler_options: &str, timeout_millis: i64) -> IndexMap<String, String> {
    IndexMap::from([
        ("RJK_COMPILER_OPTIONS".to_owned(), compiler_options.to_owned()),
        ("RJK_INIT_SCRIPT".to_owned(), String::new()),
        ("RJK_TIMEOUT_MILLIS".to_owned(), timeout_millis.to_string()),
    ])
}

fn to_string_vec(list: &[&str]) -> Vec<String> {
    list.iter().map(|item| (*item).to_owned()).collect()
}

fn capitalize(name: &str) -> String {
    let mut chars = name.chars();

    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}

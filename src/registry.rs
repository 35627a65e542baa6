use lazy_static::lazy_static;
use std::collections::{HashMap, HashSet};

lazy_static! {
    /// Maps legacy workspace names to the BCR module name for dependencies
    /// that are already published in the Bazel Central Registry.
    ///
    /// Based on registry.bazel.build contents; updating it means shipping a
    /// new build of the tool. There is no dynamic or remote lookup.
    pub static ref BCR_AVAILABLE: HashMap<&'static str, &'static str> = {
        let mut m = HashMap::new();
        // Core libraries
        m.insert("boringssl", "boringssl");
        m.insert("com_google_absl", "abseil-cpp");
        m.insert("com_google_protobuf", "protobuf");
        m.insert("com_github_grpc_grpc", "grpc");
        m.insert("com_google_googletest", "googletest");
        m.insert("net_zlib", "zlib");
        m.insert("com_googlesource_code_re2", "re2");
        m.insert("com_github_fmtlib_fmt", "fmt");
        m.insert("com_github_gabime_spdlog", "spdlog");
        m.insert("com_github_jbeder_yaml_cpp", "yaml-cpp");
        m.insert("com_github_nlohmann_json", "nlohmann_json");
        m.insert("com_github_cyan4973_xxhash", "xxhash");
        m.insert("com_github_facebook_zstd", "zstd");
        m.insert("com_github_lz4_lz4", "lz4");
        m.insert("org_brotli", "brotli");
        m.insert("com_github_libevent_libevent", "libevent");
        m.insert("org_boost", "boost");
        // Build rules
        m.insert("io_bazel_rules_go", "rules_go");
        m.insert("rules_cc", "rules_cc");
        m.insert("rules_python", "rules_python");
        m.insert("rules_foreign_cc", "rules_foreign_cc");
        m.insert("rules_rust", "rules_rust");
        m.insert("rules_java", "rules_java");
        m.insert("bazel_gazelle", "gazelle");
        m.insert("com_github_aignas_rules_shellcheck", "rules_shellcheck");
        m.insert("build_bazel_rules_apple", "rules_apple");
        m.insert("emsdk", "emsdk");
        m.insert("rules_fuzzing", "rules_fuzzing");
        m.insert("aspect_bazel_lib", "aspect_bazel_lib");
        m.insert("com_github_google_benchmark", "google_benchmark");
        // Platform pieces
        m.insert("bazel_features", "bazel_features");
        m.insert("platforms", "platforms");
        m.insert("rules_license", "rules_license");
        m.insert("rules_pkg", "rules_pkg");
        m.insert("rules_shell", "rules_shell");
        m.insert("rules_proto_grpc", "rules_proto");
        m.insert("rules_buf", "rules_buf");
        m
    };

    /// General-purpose libraries not yet in the BCR that are worth
    /// submitting, with the registry name they should be published under.
    pub static ref BCR_CANDIDATES: HashMap<&'static str, &'static str> = {
        let mut m = HashMap::new();
        m.insert("com_github_google_flatbuffers", "flatbuffers");
        m.insert("com_github_maxmind_libmaxminddb", "libmaxminddb");
        m.insert("com_github_msgpack_cpp", "msgpack");
        m.insert("fast_float", "fast_float");
        m.insert("highway", "highway");
        m.insert("dragonbox", "dragonbox");
        m.insert("fp16", "fp16");
        m.insert("simdutf", "simdutf");
        m.insert("aws_lc", "aws-lc");
        m.insert("com_github_openhistogram_libcircllhist", "libcircllhist");
        m.insert("com_github_mirror_tclap", "tclap");
        m.insert("com_github_google_libsxg", "libsxg");
        m.insert("com_github_zlib_ng_zlib_ng", "zlib-ng");
        m
    };

    /// Dependencies tied to this project's own ecosystem. They are not
    /// registry material no matter their patch status.
    pub static ref PROJECT_SPECIFIC: HashSet<&'static str> = {
        let mut s = HashSet::new();
        s.insert("envoy_examples");
        s.insert("envoy_toolshed");
        s.insert("grpc_httpjson_transcoding");
        s.insert("com_github_envoyproxy_sqlparser");
        s.insert("ocp");
        s.insert("kafka_server_binary");
        s.insert("kafka_source");
        s.insert("com_google_protoconverter");
        s.insert("com_google_protofieldextraction");
        s.insert("com_google_protoprocessinglib");
        s.insert("skywalking_data_collect_protocol");
        s.insert("com_github_skyapm_cpp2sky");
        s
    };
}

/// Hand-curated submission priorities: high-value general-purpose libraries
/// whose BCR publication would benefit the widest audience. Order matters and
/// drives the medium-term recommendation list.
pub const SUBMISSION_PRIORITY: &[&str] = &[
    "com_github_google_flatbuffers",
    "fast_float",
    "highway",
    "aws_lc",
    "com_github_maxmind_libmaxminddb",
];

/// The registry knowledge used by one analysis run.
///
/// The classifier is a pure function of these tables plus the extracted,
/// patched, and migrated sets, so the tables are carried as a value rather
/// than read from the statics directly. `builtin()` snapshots the shipped
/// tables; tests construct smaller ones by hand.
#[derive(Debug, Clone)]
pub struct KnowledgeBase {
    /// Legacy name -> BCR module name, for published modules.
    pub available: HashMap<String, String>,
    /// Legacy name -> suggested BCR name, for submission candidates.
    pub candidates: HashMap<String, String>,
    /// Names ineligible for registry publication.
    pub project_specific: HashSet<String>,
    /// Ordered submission priorities for medium-term recommendations.
    pub submission_priority: Vec<String>,
}

impl KnowledgeBase {
    /// Snapshot of the tables shipped with the tool.
    pub fn builtin() -> Self {
        Self {
            available: BCR_AVAILABLE
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
            candidates: BCR_CANDIDATES
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
            project_specific: PROJECT_SPECIFIC.iter().map(|s| s.to_string()).collect(),
            submission_priority: SUBMISSION_PRIORITY.iter().map(|s| s.to_string()).collect(),
        }
    }
}

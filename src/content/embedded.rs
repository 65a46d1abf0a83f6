//! Topic modules bundled into the binary.

/// `(module name, YAML source)` in load order.
pub const MODULES: [(&str, &str); 15] = [
    ("setup", include_str!("../../content/setup.yaml")),
    ("packages", include_str!("../../content/packages.yaml")),
    ("dsa", include_str!("../../content/dsa.yaml")),
    ("oop", include_str!("../../content/oop.yaml")),
    ("frameworks", include_str!("../../content/frameworks.yaml")),
    ("database", include_str!("../../content/database.yaml")),
    ("realtime", include_str!("../../content/realtime.yaml")),
    ("async", include_str!("../../content/async.yaml")),
    ("data-handling", include_str!("../../content/data-handling.yaml")),
    ("templates", include_str!("../../content/templates.yaml")),
    ("production", include_str!("../../content/production.yaml")),
    ("docker", include_str!("../../content/docker.yaml")),
    ("aws", include_str!("../../content/aws.yaml")),
    ("ai", include_str!("../../content/ai.yaml")),
    ("libraries", include_str!("../../content/libraries.yaml")),
];

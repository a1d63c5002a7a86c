//! Feature catalog and its cyclic expansion into per-node features.

use std::rc::Rc;

/// A named, described capability shown as one node of the galaxy.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Feature {
    pub label: String,
    pub description: String,
}

impl Feature {
    pub fn new(label: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            description: description.into(),
        }
    }

    /// Text shown in the hover tooltip.
    pub fn tooltip_text(&self) -> String {
        format!("{}: {}", self.label, self.description)
    }
}

/// Expand `catalog` cyclically until `count` features exist.
///
/// Every emitted label carries the 1-based repetition of its catalog entry as
/// a `-k` suffix, so the first pass yields `recon-1`, the second `recon-2`
/// and so on. Descriptions are copied verbatim. An empty catalog yields
/// nothing regardless of `count`.
pub fn expand(catalog: &[Feature], count: usize) -> Vec<Rc<Feature>> {
    if catalog.is_empty() {
        return Vec::new();
    }
    (0..count)
        .map(|i| {
            let base = &catalog[i % catalog.len()];
            let repetition = i / catalog.len() + 1;
            Rc::new(Feature {
                label: format!("{}-{}", base.label, repetition),
                description: base.description.clone(),
            })
        })
        .collect()
}

/// The catalog bundled with the page.
pub fn default_catalog() -> Vec<Feature> {
    DEFAULT_FEATURES
        .iter()
        .map(|(label, description)| Feature::new(*label, *description))
        .collect()
}

pub const DEFAULT_FEATURES: &[(&str, &str)] = &[
    // Reconnaissance
    ("recon", "Map hosts, ports and services."),
    ("asset-discovery", "Find unknown hosts and shadow assets."),
    ("web-enum", "Enumerate virtual hosts, directories and technologies."),
    ("subdomains", "Discover subdomains via DNS and certificates."),
    ("banner-grab", "Collect service banners to fingerprint software."),
    ("os-fingerprint", "Guess operating systems from network signatures."),
    // Scanning & enumeration
    ("port-scan", "Scan TCP/UDP ports with tuned defaults."),
    ("service-detect", "Fingerprint exposed services and versions."),
    ("vuln-scan", "Run focused vulnerability checks against services."),
    ("web-vulns", "Look for common web misconfigurations and CVEs."),
    ("wifi-audit", "Inspect wireless networks for weak encryption."),
    ("tls-audit", "Review TLS ciphers, versions and certificates."),
    // Config & hardening
    ("linux-hardening", "Check Linux hosts against hardening baselines."),
    ("ssh-hardening", "Audit SSH configuration and authentication."),
    ("password-policy", "Verify password and lockout policies."),
    ("firewall-rules", "Summarise and sanity-check firewall policies."),
    ("service-pruning", "Flag unnecessary services and daemons."),
    ("logging", "Check logging and log-rotation configuration."),
    // Cloud & container
    ("cloud-inventory", "List cloud resources across accounts."),
    ("s3-permissions", "Detect public or overly permissive buckets."),
    ("iam-review", "Highlight dangerous IAM policies and roles."),
    ("k8s-rbac", "Inspect Kubernetes cluster roles and bindings."),
    ("container-secrets", "Search container images for embedded secrets."),
    ("image-hardening", "Check base images against security baselines."),
    // Secrets & supply chain
    ("secrets-scan", "Scan repos and configs for API keys and tokens."),
    ("dependency-audit", "Check dependencies for known CVEs."),
    ("lockfile-diff", "Detect risky dependency drifts over time."),
    ("sbom-generate", "Generate a software bill-of-materials."),
    ("signed-builds", "Verify signatures for artefacts and images."),
    // Network & traffic
    ("packet-capture", "Capture and inspect network traffic for anomalies."),
    ("dns-monitor", "Spot suspicious DNS queries and domains."),
    ("proxy-detect", "Find transparent proxies and intercept points."),
    ("exfil-routes", "Map potential data exfiltration paths."),
    ("latency-map", "Visualise latency between key nodes."),
    // Authentication & access
    ("auth-matrix", "Summarise who can access which systems."),
    ("2fa-coverage", "Measure MFA coverage across accounts."),
    ("default-creds", "Check for default or weak credentials."),
    ("session-hygiene", "Review session timeouts and revocation."),
    ("priv-esc", "Flag potential local privilege escalation paths."),
    // Reporting & workflows
    ("reporting", "Generate terminal-native reports of findings."),
    ("timeline", "Build a timeline of scans and changes."),
    ("export-json", "Export results as JSON for automation."),
    ("export-markdown", "Create Markdown reports for tickets."),
    ("ticket-sync", "Send key findings into ticketing systems."),
    // Automation & CI
    ("ci-checks", "Embed RavenCLI checks into CI pipelines."),
    ("nightly-runs", "Schedule nightly baselines against environments."),
    ("drift-detect", "Detect config drift between runs."),
    ("playbooks", "Codify repeatable blue-team playbooks."),
    ("autofix-hints", "Suggest remediation steps for common issues."),
    // Forensics & detection
    ("log-anomaly", "Highlight unusual log patterns."),
    ("persistence-hunt", "Search for common persistence mechanisms."),
    ("malware-traces", "Look for simple malware indicators of compromise."),
    ("user-behavior", "Flag risky user behaviour patterns."),
    // Governance & hygiene
    ("policy-checks", "Compare hosts against internal security policies."),
    ("baseline-compare", "Compare environments against golden images."),
    ("compliance-view", "Summarise coverage vs chosen standards."),
    ("exceptions", "Track documented risk acceptances."),
];

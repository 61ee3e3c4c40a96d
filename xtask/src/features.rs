use std::process::Command;

use anyhow::{Context, Result};

/// `portalkit-common` tiers; the crate has no default features.
const COMMON_TIERS: &[&str] = &["foundation", "runtime"];

/// Check each `portalkit-common` tier builds and tests on its own.
pub fn test_feature_matrix() -> Result<()> {
    println!("Testing {} portalkit-common feature tiers...", COMMON_TIERS.len());

    for (index, tier) in COMMON_TIERS.iter().enumerate() {
        println!(
            "\n[{}/{}] cargo test -p portalkit-common --no-default-features --features {tier}",
            index + 1,
            COMMON_TIERS.len()
        );

        let status = Command::new("cargo")
            .args(["test", "-p", "portalkit-common", "--no-default-features", "--features", tier])
            .status()
            .with_context(|| format!("Failed to run cargo test for tier '{tier}'"))?;

        if !status.success() {
            anyhow::bail!("Feature tier '{tier}' failed");
        }

        println!("✅ Tier '{tier}' passed");
    }

    println!("\n✅ All {} feature tiers pass!", COMMON_TIERS.len());
    Ok(())
}

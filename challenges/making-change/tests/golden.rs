//! Golden reports under `data/`, checked for each strategy that can handle them.

use std::path::{Path, PathBuf};

use making_change::testing::verify_all_cases;
use making_change::{Settings, Strategy};

fn data_dir() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("data")
}

fn settings(strategy: Strategy) -> Settings {
    Settings {
        strategy,
        ..Settings::default()
    }
}

#[test]
fn golden_bottom_up() {
    verify_all_cases(&data_dir(), "golden", &settings(Strategy::BottomUp));
}

#[test]
fn golden_memoized() {
    verify_all_cases(&data_dir(), "golden", &settings(Strategy::Memoized));
}

#[test]
fn small_cases_agree_across_strategies() {
    for strategy in [Strategy::BottomUp, Strategy::Memoized, Strategy::Naive] {
        verify_all_cases(&data_dir(), "small", &settings(strategy));
    }
}

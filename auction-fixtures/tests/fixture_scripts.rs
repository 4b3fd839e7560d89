//! End-to-end tests: generate a scenario and write both scripts to disk
//!
//! These check the properties the benchmark harness relies on: line counts,
//! buyer-before-seller ordering and the seller price tuple.

use approx::assert_relative_eq;
use auction_fixtures::{FixtureConfig, GenerationConfig, Role, ScenarioGenerator, ScriptFiles};
use std::fs;
use std::path::Path;

const SEED: u64 = 42;

/// Generate and write scripts into `dir`, returning (enrollment, bids) contents
fn run(dir: &Path, generation: GenerationConfig) -> (String, String) {
    let config = FixtureConfig::default()
        .with_generation(generation)
        .with_outputs(dir.join("accountReg.sh"), dir.join("bidConfig.sh"));

    let scenario = ScenarioGenerator::from_config(&config.generation)
        .generate(config.generation.buyers, config.generation.sellers);
    ScriptFiles::create(&config.enrollment_path, &config.bid_path)
        .unwrap()
        .write(&scenario)
        .unwrap();

    (
        fs::read_to_string(&config.enrollment_path).unwrap(),
        fs::read_to_string(&config.bid_path).unwrap(),
    )
}

/// Index of the last buyer line and first seller line
fn role_boundary(lines: &[&str]) -> (Option<usize>, Option<usize>) {
    let last_buyer = lines.iter().rposition(|l| l.contains(" org1 buyer"));
    let first_seller = lines.iter().position(|l| l.contains(" org2 seller"));
    (last_buyer, first_seller)
}

#[test]
fn test_reference_run_output() {
    let dir = tempfile::tempdir().unwrap();
    let (enrollment, bids) = run(dir.path(), GenerationConfig::default().with_seed(SEED));

    assert_eq!(
        enrollment,
        "node ../registerEnrollUser.js org1 buyer1\n\
         node ../registerAccount.js org1 buyer1\n\
         node ../registerEnrollUser.js org1 buyer2\n\
         node ../registerAccount.js org1 buyer2\n\
         node ../registerEnrollUser.js org2 seller1\n\
         node ../registerAccount.js org2 seller1\n\
         node ../registerEnrollUser.js org2 seller2\n\
         node ../registerAccount.js org2 seller2\n"
    );
    assert_eq!(
        bids,
        "node ../bid.js org1 buyer1 $1 6.5 2\n\
         node ../bid.js org1 buyer2 $1 11 4\n\
         node ../bid.js org2 seller1 $1 6.5,0 3\n\
         node ../bid.js org2 seller2 $1 11,0 2\n"
    );
}

#[test]
fn test_reference_output_independent_of_seed() {
    let a = tempfile::tempdir().unwrap();
    let b = tempfile::tempdir().unwrap();

    let first = run(a.path(), GenerationConfig::default().with_seed(1));
    let second = run(b.path(), GenerationConfig::default());

    assert_eq!(first, second);
}

#[test]
fn test_empty_population_writes_empty_files() {
    let dir = tempfile::tempdir().unwrap();
    let (enrollment, bids) = run(dir.path(), GenerationConfig::default().with_population(0, 0));

    assert!(enrollment.is_empty());
    assert!(bids.is_empty());
    assert!(dir.path().join("accountReg.sh").exists());
    assert!(dir.path().join("bidConfig.sh").exists());
}

#[test]
fn test_line_counts_match_population() {
    for (buyers, sellers, sampled) in [(1, 0, false), (0, 3, false), (9, 4, false), (9, 4, true)] {
        let dir = tempfile::tempdir().unwrap();
        let generation = GenerationConfig::default()
            .with_population(buyers, sellers)
            .with_seed(SEED)
            .with_sampled_values(sampled);
        let (enrollment, bids) = run(dir.path(), generation);

        let agents = if sampled {
            buyers + sellers
        } else {
            buyers.min(2) + sellers.min(2)
        };
        assert_eq!(enrollment.lines().count(), 2 * agents);
        assert_eq!(bids.lines().count(), agents);
    }
}

#[test]
fn test_buyers_precede_sellers() {
    let dir = tempfile::tempdir().unwrap();
    let generation = GenerationConfig::default()
        .with_population(6, 6)
        .with_seed(SEED)
        .with_sampled_values(true);
    let (enrollment, bids) = run(dir.path(), generation);

    for text in [&enrollment, &bids] {
        let lines: Vec<&str> = text.lines().collect();
        let (last_buyer, first_seller) = role_boundary(&lines);
        assert!(last_buyer.unwrap() < first_seller.unwrap());
    }
}

#[test]
fn test_seller_bids_carry_price_tuple() {
    let dir = tempfile::tempdir().unwrap();
    let generation = GenerationConfig::default()
        .with_population(5, 5)
        .with_seed(SEED)
        .with_sampled_values(true);
    let (_, bids) = run(dir.path(), generation);

    for line in bids.lines() {
        let fields: Vec<&str> = line.split(' ').collect();
        assert_eq!(fields.len(), 7, "unexpected field count: {line}");
        assert_eq!(fields[4], "$1");

        if fields[2] == Role::Seller.organization() {
            let (price, zero) = fields[5].split_once(',').unwrap();
            assert!(price.parse::<f64>().is_ok());
            assert_eq!(zero, "0");
        } else {
            assert!(!fields[5].contains(','));
            assert!(fields[5].parse::<f64>().is_ok());
        }
        assert!(fields[6].parse::<u32>().is_ok());
    }
}

#[test]
fn test_sampled_run_reproducible_with_seed() {
    let a = tempfile::tempdir().unwrap();
    let b = tempfile::tempdir().unwrap();
    let generation = GenerationConfig::default()
        .with_population(20, 20)
        .with_seed(SEED)
        .with_sampled_values(true);

    assert_eq!(run(a.path(), generation.clone()), run(b.path(), generation));
}

#[test]
fn test_sampled_prices_round_to_cents() {
    let scenario = ScenarioGenerator::new(SEED)
        .with_sampled_values(true)
        .generate(50, 50);

    for agent in scenario.agents() {
        let cents = agent.price() * 100.0;
        assert_relative_eq!(cents, cents.round(), epsilon = 1e-6);
    }
}

#[test]
fn test_config_file_drives_run() {
    let dir = tempfile::tempdir().unwrap();
    let config_path = dir.path().join("fixtures.json");
    let enrollment_path = dir.path().join("enroll.sh");
    let bid_path = dir.path().join("bids.sh");
    let json = serde_json::json!({
        "buyers": 1,
        "sellers": 3,
        "seed": SEED,
        "enrollment_path": enrollment_path,
        "bid_path": bid_path,
    });
    fs::write(&config_path, json.to_string()).unwrap();

    let config = FixtureConfig::from_file(&config_path).unwrap();
    let scenario = ScenarioGenerator::from_config(&config.generation)
        .generate(config.generation.buyers, config.generation.sellers);
    let summary = ScriptFiles::create(&config.enrollment_path, &config.bid_path)
        .unwrap()
        .write(&scenario)
        .unwrap();

    assert_eq!(summary.bid_lines, 3);
    assert_eq!(
        fs::read_to_string(&bid_path).unwrap(),
        "node ../bid.js org1 buyer1 $1 6.5 2\n\
         node ../bid.js org2 seller1 $1 6.5,0 3\n\
         node ../bid.js org2 seller2 $1 11,0 2\n"
    );
}

//! Simulator Tests
//!
//! End-to-end checks of the fault counting properties: every run is
//! cross-checked against the exact reference sequence it consumed, which is
//! regenerated from the same seed.

use std::collections::HashSet;

use virtmem::{
    generate, simulate, Error, ErrorKind, Locality, PageId, PolicyKind, SimConfig, SimRng,
    Simulator,
};

const POLICIES: [PolicyKind; 3] = [PolicyKind::Random, PolicyKind::Fifo, PolicyKind::Lru];
const LOCALITIES: [Locality; 3] = [Locality::Low, Locality::Medium, Locality::High];

/// The sequence `Simulator::run` consumes for `config` under `seed`.
fn reference_sequence(config: &SimConfig, seed: u64) -> Vec<PageId> {
    generate(
        config.nrefs,
        config.npages,
        config.locality,
        &mut SimRng::from_seed(seed),
    )
    .unwrap()
}

fn distinct(refs: &[PageId]) -> u64 {
    refs.iter().collect::<HashSet<_>>().len() as u64
}

/// Independent single-frame model: a fault whenever the page differs from
/// the one most recently loaded.
fn single_frame_faults(refs: &[PageId]) -> u64 {
    let mut resident = None;
    let mut faults = 0;
    for &page in refs {
        if resident != Some(page) {
            faults += 1;
            resident = Some(page);
        }
    }
    faults
}

fn run(config: &SimConfig, seed: u64) -> u64 {
    Simulator::new(config, SimRng::from_seed(seed)).run().unwrap()
}

// ============================================================================
// Scenario A: everything fits in memory
// ============================================================================

#[test]
fn test_scenario_a_fits_in_memory() {
    for policy in POLICIES {
        for seed in 0..20 {
            let config = SimConfig::new(5, 5, policy, 20, Locality::Low).unwrap();
            let faults = run(&config, seed);
            let refs = reference_sequence(&config, seed);

            assert!(faults <= 5);
            assert_eq!(faults, distinct(&refs), "policy {policy}, seed {seed}");
        }
    }
}

#[test]
fn test_more_frames_than_pages() {
    for policy in POLICIES {
        for locality in LOCALITIES {
            let config = SimConfig::new(60, 100, policy, 3000, locality).unwrap();
            let faults = run(&config, 123);
            let refs = reference_sequence(&config, 123);
            assert_eq!(faults, distinct(&refs));
        }
    }
}

// ============================================================================
// Scenario B: a single frame
// ============================================================================

#[test]
fn test_scenario_b_single_frame_random() {
    for seed in 0..50 {
        let config = SimConfig::new(100, 1, PolicyKind::Random, 10, Locality::Low).unwrap();
        let faults = run(&config, seed);
        let refs = reference_sequence(&config, seed);
        assert_eq!(faults, single_frame_faults(&refs), "seed {seed}");
    }
}

#[test]
fn test_single_frame_any_policy() {
    for policy in POLICIES {
        for locality in LOCALITIES {
            let config = SimConfig::new(40, 1, policy, 2000, locality).unwrap();
            let faults = run(&config, 7);
            let refs = reference_sequence(&config, 7);
            assert_eq!(faults, single_frame_faults(&refs));
        }
    }
}

// ============================================================================
// Scenario D: no references
// ============================================================================

#[test]
fn test_scenario_d_zero_refs() {
    for policy in POLICIES {
        let config = SimConfig::new(100, 10, policy, 0, Locality::High).unwrap();
        let report = simulate(&config, None).unwrap();
        assert_eq!(report.faults, 0);
        assert_eq!(report.stats.references, 0);
    }
}

// ============================================================================
// General properties
// ============================================================================

#[test]
fn test_cold_start_every_first_reference_faults() {
    for policy in POLICIES {
        let config = SimConfig::new(300, 16, policy, 0, Locality::Low).unwrap();
        let refs = generate(2000, 300, Locality::Medium, &mut SimRng::from_seed(2)).unwrap();

        let mut sim = Simulator::new(&config, SimRng::from_seed(3));
        let mut seen = HashSet::new();
        for &page in &refs {
            let lookup = sim.access(page).unwrap();
            if seen.insert(page) {
                assert_eq!(lookup, virtmem::Lookup::Miss, "first touch of {page}");
            }
        }
    }
}

#[test]
fn test_fault_count_bounds() {
    for policy in POLICIES {
        for locality in LOCALITIES {
            let config = SimConfig::new(1000, 50, policy, 5000, locality).unwrap();
            let report = simulate(&config, Some(99)).unwrap();

            assert!(report.faults <= 5000);
            assert!(report.faults >= 1);
            assert_eq!(report.stats.hits + report.stats.faults, 5000);
            assert!(report.stats.evictions <= report.stats.faults);
        }
    }
}

#[test]
fn test_locality_reduces_faults() {
    // Tighter locality means fewer distinct pages in flight.
    let low = SimConfig::new(1000, 50, PolicyKind::Lru, 5000, Locality::Low).unwrap();
    let high = SimConfig::new(1000, 50, PolicyKind::Lru, 5000, Locality::High).unwrap();

    let low_faults = run(&low, 5);
    let high_faults = run(&high, 5);
    assert!(high_faults < low_faults, "{high_faults} >= {low_faults}");
}

#[test]
fn test_fifo_and_lru_agree_without_refresh() {
    // Hits never refresh recency, so LRU degenerates to load order.
    for seed in 0..10 {
        let refs = generate(3000, 200, Locality::Medium, &mut SimRng::from_seed(seed)).unwrap();

        let fifo = SimConfig::new(200, 17, PolicyKind::Fifo, 0, Locality::Low).unwrap();
        let lru = SimConfig::new(200, 17, PolicyKind::Lru, 0, Locality::Low).unwrap();

        let fifo_faults = Simulator::new(&fifo, SimRng::from_seed(0))
            .run_references(&refs)
            .unwrap();
        let lru_faults = Simulator::new(&lru, SimRng::from_seed(0))
            .run_references(&refs)
            .unwrap();

        assert_eq!(fifo_faults, lru_faults, "seed {seed}");
    }
}

#[test]
fn test_resident_pages_match_frames() {
    for policy in POLICIES {
        let config = SimConfig::new(120, 9, policy, 4000, Locality::Medium).unwrap();
        let mut sim = Simulator::new(&config, SimRng::from_seed(31));
        sim.run().unwrap();

        let table = sim.page_table();
        let mut occupied = 0;
        for (index, entry) in table.entries().iter().enumerate() {
            if let Some(frame) = entry.frame() {
                occupied += 1;
                assert_eq!(table.frame_content(frame), Some(PageId::new(index)));
            }
        }
        assert_eq!(occupied, table.resident_count());
        assert_eq!(occupied, 9);
    }
}

#[test]
fn test_parallel_simulations_are_independent() {
    let config = SimConfig::new(500, 25, PolicyKind::Random, 5000, Locality::Medium).unwrap();
    let expected = run(&config, 77);

    let handles: Vec<_> = (0..8)
        .map(|_| std::thread::spawn(move || run(&config, 77)))
        .collect();

    for handle in handles {
        assert_eq!(handle.join().unwrap(), expected);
    }
}

#[test]
fn test_invalid_configs() {
    let err = SimConfig::from_raw(-1, 5, PolicyKind::Fifo, 10, Locality::Low).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Validation);

    let err = SimConfig::new(1001, 5, PolicyKind::Fifo, 10, Locality::Low).unwrap_err();
    assert!(matches!(err, Error::ParameterOutOfRange { .. }));

    let err = SimConfig::new(10, 501, PolicyKind::Fifo, 10, Locality::Low).unwrap_err();
    assert!(matches!(err, Error::ParameterOutOfRange { name: "nframes", .. }));
}

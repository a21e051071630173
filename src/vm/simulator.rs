//! Fault simulator - the driver tying generator, page table and policy.
//!
//! The [`Simulator`] provides:
//! - Fresh, self-contained state per run (no globals)
//! - Free-frame filling during warm-up, policy eviction afterwards
//! - A logical clock advanced exactly once per completed fault

use log::{debug, info, trace};

use crate::common::{Error, FrameId, PageId, Result, SimConfig, SimRng};
use crate::vm::{Lookup, PageTable, Replacer, SimStats, StatsSnapshot};
use crate::workload::generate;

/// One page replacement simulation.
///
/// # Architecture
/// ```text
/// ┌─────────────────────────────────────────────────────────┐
/// │                       Simulator                         │
/// │  ┌──────────┐   refs   ┌────────────┐  miss  ┌────────┐ │
/// │  │ SimRng   │────────▶ │ PageTable  │──────▶ │Replacer│ │
/// │  │(generate)│          │pages+frames│◀────── │ victim │ │
/// │  └──────────┘          └────────────┘ evict/ └────────┘ │
/// │        clock: u64            stats      install         │
/// └─────────────────────────────────────────────────────────┘
/// ```
///
/// # Usage
/// ```
/// use virtmem::{Locality, PolicyKind, SimConfig, SimRng, Simulator};
///
/// let config = SimConfig::new(100, 10, PolicyKind::Fifo, 500, Locality::Medium).unwrap();
/// let mut sim = Simulator::new(&config, SimRng::from_seed(1));
///
/// let faults = sim.run().unwrap();
/// assert!(faults <= 500);
/// assert_eq!(sim.clock(), faults);
/// ```
#[derive(Debug)]
pub struct Simulator {
    config: SimConfig,
    page_table: PageTable,
    replacer: Replacer,
    rng: SimRng,
    /// Logical clock, advanced once per completed fault.
    clock: u64,
    stats: SimStats,
}

impl Simulator {
    /// Create a simulator with every page absent and every frame empty.
    pub fn new(config: &SimConfig, rng: SimRng) -> Self {
        debug!(
            "new simulator: npages={} nframes={} policy={} seed={}",
            config.npages,
            config.nframes,
            config.policy,
            rng.seed()
        );
        Self {
            config: *config,
            page_table: PageTable::new(config.npages, config.nframes),
            replacer: Replacer::new(config.policy, config.nframes),
            rng,
            clock: 0,
            stats: SimStats::new(),
        }
    }

    // ========================================================================
    // Public API: Running
    // ========================================================================

    /// Generate the configured reference stream and replay it.
    ///
    /// Returns the number of faults over the whole sequence.
    ///
    /// # Errors
    /// - `Error::Allocation` if the reference buffer cannot be reserved
    /// - `Error::NoVictimFrame` if the policy fails after warm-up
    pub fn run(&mut self) -> Result<u64> {
        let refs = generate(
            self.config.nrefs,
            self.config.npages,
            self.config.locality,
            &mut self.rng,
        )?;
        self.run_references(&refs)
    }

    /// Replay a supplied reference sequence.
    ///
    /// Every reference is range-checked before the first one is processed.
    /// Returns the faults incurred by this sequence alone.
    ///
    /// # Errors
    /// - `Error::InvalidPageId` if a reference is outside `[0, npages)`
    /// - `Error::NoVictimFrame` if the policy fails after warm-up
    pub fn run_references(&mut self, refs: &[PageId]) -> Result<u64> {
        if let Some(&page) = refs.iter().find(|&&page| !self.page_table.contains(page)) {
            return Err(self.invalid_page(page));
        }

        let before = self.stats.faults;
        for &page in refs {
            self.reference(page)?;
        }
        Ok(self.stats.faults - before)
    }

    /// Process a single reference.
    ///
    /// Returns `Lookup::Hit` if the page was resident, `Lookup::Miss` if it
    /// faulted (and has now been loaded).
    pub fn access(&mut self, page: PageId) -> Result<Lookup> {
        if !self.page_table.contains(page) {
            return Err(self.invalid_page(page));
        }
        self.reference(page)
    }

    // ========================================================================
    // Public API: Inspection
    // ========================================================================

    /// Current logical clock value.
    pub fn clock(&self) -> u64 {
        self.clock
    }

    /// The page table, for inspection.
    pub fn page_table(&self) -> &PageTable {
        &self.page_table
    }

    /// The active replacement policy.
    pub fn replacer(&self) -> &Replacer {
        &self.replacer
    }

    /// The configuration this simulator was built from.
    pub fn config(&self) -> &SimConfig {
        &self.config
    }

    /// Seed of the random source.
    pub fn seed(&self) -> u64 {
        self.rng.seed()
    }

    /// Snapshot of the statistics so far.
    pub fn stats(&self) -> StatsSnapshot {
        self.stats.snapshot()
    }

    // ========================================================================
    // Internal: Fault handling
    // ========================================================================

    fn reference(&mut self, page: PageId) -> Result<Lookup> {
        self.stats.references += 1;

        match self.page_table.lookup(page) {
            hit @ Lookup::Hit(_) => {
                self.stats.hits += 1;
                Ok(hit)
            }
            Lookup::Miss => {
                self.handle_fault(page)?;
                Ok(Lookup::Miss)
            }
        }
    }

    /// Evict (if needed), install, and tick the clock.
    fn handle_fault(&mut self, page: PageId) -> Result<()> {
        let frame = self.victim_frame(page)?;

        if let Some(evicted) = self.page_table.evict(frame) {
            self.stats.evictions += 1;
            trace!("clock {}: evict {} from {}", self.clock, evicted, frame);
        }

        self.page_table.install(page, frame, self.clock);
        self.replacer.record_load(frame, page);
        trace!("clock {}: load {} into {}", self.clock, page, frame);

        self.stats.faults += 1;
        self.clock += 1;
        Ok(())
    }

    /// Choose the frame that will receive `page`.
    ///
    /// Empty frames are used first, lowest number first. Once every frame is
    /// occupied the policy picks among them; a policy that then has no
    /// answer is a bug.
    fn victim_frame(&mut self, page: PageId) -> Result<FrameId> {
        if let Some(frame) = self.page_table.first_free_frame() {
            return Ok(frame);
        }

        let nframes = self.page_table.nframes();
        match self
            .replacer
            .select_victim(&self.page_table, self.clock, &mut self.rng)
        {
            Some(frame) if frame.0 < nframes => Ok(frame),
            Some(frame) => Err(Error::VictimOutOfRange { frame, nframes }),
            None => Err(Error::NoVictimFrame {
                page,
                clock: self.clock,
            }),
        }
    }

    fn invalid_page(&self, page: PageId) -> Error {
        Error::InvalidPageId {
            page,
            npages: self.page_table.npages(),
        }
    }
}

/// Outcome of [`simulate`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SimReport {
    /// Total page faults over the run.
    pub faults: u64,
    /// Full counters at the end of the run.
    pub stats: StatsSnapshot,
    /// Seed that reproduces this run.
    pub seed: u64,
}

/// Run one complete simulation.
///
/// Seeds from `seed` if given, otherwise from the wall clock. The seed in
/// use is logged and returned so any run can be replayed.
pub fn simulate(config: &SimConfig, seed: Option<u64>) -> Result<SimReport> {
    let rng = seed.map_or_else(SimRng::from_clock, SimRng::from_seed);
    let seed = rng.seed();
    info!(
        "simulating {} refs over {} pages in {} frames (policy {}, locality {}, seed {})",
        config.nrefs, config.npages, config.nframes, config.policy, config.locality, seed
    );

    let mut sim = Simulator::new(config, rng);
    let faults = sim.run()?;
    let stats = sim.stats();
    info!("{}", stats);

    Ok(SimReport {
        faults,
        stats,
        seed,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::vm::PolicyKind;
    use crate::workload::Locality;

    fn create_sim(npages: usize, nframes: usize, policy: PolicyKind) -> Simulator {
        let config = SimConfig::new(npages, nframes, policy, 0, Locality::Low).unwrap();
        Simulator::new(&config, SimRng::from_seed(0xC0FFEE))
    }

    fn pages(ids: &[usize]) -> Vec<PageId> {
        ids.iter().copied().map(PageId::new).collect()
    }

    #[test]
    fn test_cold_start_faults() {
        let mut sim = create_sim(10, 4, PolicyKind::Lru);

        assert_eq!(sim.access(PageId::new(3)).unwrap(), Lookup::Miss);
        assert_eq!(sim.access(PageId::new(3)).unwrap(), Lookup::Hit(FrameId::new(0)));
        assert_eq!(sim.clock(), 1);
    }

    #[test]
    fn test_hit_does_not_touch_state() {
        let mut sim = create_sim(10, 2, PolicyKind::Lru);
        sim.access(PageId::new(1)).unwrap();
        let before = *sim.page_table().entry(PageId::new(1)).unwrap();

        sim.access(PageId::new(1)).unwrap();

        assert_eq!(*sim.page_table().entry(PageId::new(1)).unwrap(), before);
        assert_eq!(sim.clock(), 1);
    }

    #[test]
    fn test_warm_up_fills_frames_in_order() {
        for policy in [PolicyKind::Random, PolicyKind::Fifo, PolicyKind::Lru] {
            let mut sim = create_sim(10, 3, policy);
            sim.run_references(&pages(&[7, 8, 9])).unwrap();

            assert_eq!(sim.page_table().frame_content(FrameId::new(0)), Some(PageId::new(7)));
            assert_eq!(sim.page_table().frame_content(FrameId::new(1)), Some(PageId::new(8)));
            assert_eq!(sim.page_table().frame_content(FrameId::new(2)), Some(PageId::new(9)));
            assert_eq!(sim.stats().evictions, 0);
        }
    }

    #[test]
    fn test_fifo_evicts_in_load_order() {
        let mut sim = create_sim(10, 3, PolicyKind::Fifo);
        sim.run_references(&pages(&[0, 1, 2, 3])).unwrap();

        // Page 0 was loaded first and is the first to go.
        assert!(!sim.page_table().entry(PageId::new(0)).unwrap().is_resident());
        assert_eq!(sim.page_table().frame_content(FrameId::new(0)), Some(PageId::new(3)));

        sim.run_references(&pages(&[4])).unwrap();
        assert!(!sim.page_table().entry(PageId::new(1)).unwrap().is_resident());
        assert_eq!(sim.page_table().frame_content(FrameId::new(1)), Some(PageId::new(4)));
    }

    #[test]
    fn test_lru_evicts_oldest_load() {
        let mut sim = create_sim(10, 2, PolicyKind::Lru);
        // Hits on page 0 do not refresh its load time.
        let faults = sim.run_references(&pages(&[0, 1, 0, 0, 2])).unwrap();

        assert_eq!(faults, 3);
        assert!(!sim.page_table().entry(PageId::new(0)).unwrap().is_resident());
        assert!(sim.page_table().entry(PageId::new(1)).unwrap().is_resident());
        assert!(sim.page_table().entry(PageId::new(2)).unwrap().is_resident());
    }

    #[test]
    fn test_clock_advances_once_per_fault() {
        for policy in [PolicyKind::Random, PolicyKind::Fifo, PolicyKind::Lru] {
            let mut sim = create_sim(20, 3, policy);
            let faults = sim
                .run_references(&pages(&[0, 1, 2, 3, 4, 0, 5, 5, 6, 1]))
                .unwrap();
            assert_eq!(sim.clock(), faults, "policy {policy}");
        }
    }

    #[test]
    fn test_single_frame_thrashes() {
        let mut sim = create_sim(10, 1, PolicyKind::Random);
        let faults = sim.run_references(&pages(&[1, 1, 2, 1, 1, 3])).unwrap();

        assert_eq!(faults, 4);
        assert_eq!(sim.stats().evictions, 3);
        assert_eq!(sim.stats().hits, 2);
    }

    #[test]
    fn test_invalid_reference_rejected_up_front() {
        let mut sim = create_sim(4, 2, PolicyKind::Fifo);
        let result = sim.run_references(&pages(&[0, 1, 4]));

        assert!(matches!(result, Err(Error::InvalidPageId { npages: 4, .. })));
        // Nothing was processed.
        assert_eq!(sim.stats().references, 0);
        assert_eq!(sim.clock(), 0);
    }

    #[test]
    fn test_run_generates_and_counts() {
        let config = SimConfig::new(50, 5, PolicyKind::Lru, 1000, Locality::High).unwrap();
        let mut sim = Simulator::new(&config, SimRng::from_seed(17));
        let faults = sim.run().unwrap();

        let stats = sim.stats();
        assert_eq!(stats.references, 1000);
        assert_eq!(stats.faults, faults);
        assert_eq!(stats.hits + stats.faults, 1000);
        assert!(sim.page_table().resident_count() <= 5);
    }

    #[test]
    fn test_simulate_is_reproducible_with_seed() {
        let config = SimConfig::new(200, 20, PolicyKind::Random, 3000, Locality::Medium).unwrap();
        let a = simulate(&config, Some(42)).unwrap();
        let b = simulate(&config, Some(42)).unwrap();

        assert_eq!(a, b);
        assert_eq!(a.seed, 42);
    }

    #[test]
    fn test_simulate_zero_refs() {
        let config = SimConfig::new(10, 2, PolicyKind::Fifo, 0, Locality::Low).unwrap();
        let report = simulate(&config, None).unwrap();
        assert_eq!(report.faults, 0);
    }
}

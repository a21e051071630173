//! Reference stream generator.

use log::debug;
use rand::Rng;

use crate::common::{Error, PageId, Result};
use crate::workload::Locality;

/// Generate `nrefs` page references in `[0, npages)`.
///
/// The whole sequence is produced before any simulation starts. For
/// `Medium` and `High` locality each reference is the previous one plus a
/// uniform offset in `[-radius, radius]`, wrapped with Euclidean modulo so
/// the result is never negative. The walk starts from a uniformly random
/// page.
///
/// # Errors
/// - `Error::EmptyAddressSpace` if `nrefs > 0` and `npages == 0`
/// - `Error::Allocation` if the reference buffer cannot be reserved
///
/// # Example
/// ```
/// use virtmem::{generate, Locality, SimRng};
///
/// let mut rng = SimRng::from_seed(7);
/// let refs = generate(100, 50, Locality::High, &mut rng).unwrap();
/// assert_eq!(refs.len(), 100);
/// assert!(refs.iter().all(|p| p.0 < 50));
/// ```
pub fn generate<R: Rng>(
    nrefs: usize,
    npages: usize,
    locality: Locality,
    rng: &mut R,
) -> Result<Vec<PageId>> {
    let mut refs = Vec::new();
    refs.try_reserve_exact(nrefs)?;

    if nrefs == 0 {
        return Ok(refs);
    }
    if npages == 0 {
        return Err(Error::EmptyAddressSpace);
    }

    match locality.radius(npages) {
        None => {
            refs.extend((0..nrefs).map(|_| PageId::new(rng.random_range(0..npages))));
        }
        Some(radius) => {
            let radius = radius as i64;
            let modulus = npages as i64;
            let mut last = rng.random_range(0..npages) as i64;
            for _ in 0..nrefs {
                let offset = rng.random_range(-radius..=radius);
                last = (last + offset).rem_euclid(modulus);
                refs.push(PageId::new(last as usize));
            }
        }
    }

    debug!(
        "generated {} references over {} pages ({} locality)",
        nrefs, npages, locality
    );
    Ok(refs)
}

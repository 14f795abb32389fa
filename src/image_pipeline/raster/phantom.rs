use rand::RngCore;

use crate::image_pipeline::common::error::Result;
use crate::image_pipeline::raster::{
    CtPhantom, GenericPhantom, MrPhantom, RasterSynthesizer, UsPhantom, types::Raster,
};

/// Synthesis rule keyed by modality tag
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phantom {
    Ct,
    Mr,
    Ultrasound,
    /// Fallback for any tag without a dedicated rule
    Generic,
}

impl Phantom {
    pub fn for_modality(tag: &str) -> Self {
        match tag {
            "CT" => Phantom::Ct,
            "MR" => Phantom::Mr,
            "US" => Phantom::Ultrasound,
            _ => Phantom::Generic,
        }
    }
}

impl RasterSynthesizer for Phantom {
    fn synthesize(&self, width: usize, height: usize, rng: &mut dyn RngCore) -> Result<Raster> {
        match self {
            Phantom::Ct => CtPhantom.synthesize(width, height, rng),
            Phantom::Mr => MrPhantom.synthesize(width, height, rng),
            Phantom::Ultrasound => UsPhantom.synthesize(width, height, rng),
            Phantom::Generic => GenericPhantom.synthesize(width, height, rng),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn test_lookup_by_tag() {
        assert_eq!(Phantom::for_modality("CT"), Phantom::Ct);
        assert_eq!(Phantom::for_modality("MR"), Phantom::Mr);
        assert_eq!(Phantom::for_modality("US"), Phantom::Ultrasound);
        assert_eq!(Phantom::for_modality("XA"), Phantom::Generic);
        assert_eq!(Phantom::for_modality("ct"), Phantom::Generic);
    }

    #[test]
    fn test_every_variant_fills_requested_shape() {
        for phantom in [Phantom::Ct, Phantom::Mr, Phantom::Ultrasound, Phantom::Generic] {
            let mut rng = StdRng::seed_from_u64(1);
            let raster = phantom.synthesize(300, 260, &mut rng).unwrap();
            assert_eq!((raster.width, raster.height), (300, 260));
            assert_eq!(raster.data.len(), 300 * 260);
        }
    }

    #[test]
    fn test_dispatch_matches_direct_call() {
        let mut a = StdRng::seed_from_u64(9);
        let mut b = StdRng::seed_from_u64(9);
        let via_enum = Phantom::Mr.synthesize(256, 256, &mut a).unwrap();
        let direct = MrPhantom.synthesize(256, 256, &mut b).unwrap();
        assert_eq!(via_enum, direct);
    }
}

use crate::image_pipeline::dicom::types::Modality;

/// Modality-dependent display and acquisition attributes
#[derive(Debug, Clone, PartialEq)]
pub struct ModalityProfile {
    pub rescale_intercept: i32,
    pub rescale_slope: i32,
    pub window_center: i32,
    pub window_width: i32,
    /// Slice thickness in millimetres
    pub slice_thickness: Option<f64>,
    /// Row and column spacing in millimetres
    pub pixel_spacing: Option<(f64, f64)>,
    /// Peak tube voltage (CT only)
    pub kvp: Option<u32>,
    /// Field strength in tesla (MR only)
    pub magnetic_field_strength: Option<f64>,
    /// Repetition time in milliseconds (MR only)
    pub repetition_time: Option<f64>,
    /// Echo time in milliseconds (MR only)
    pub echo_time: Option<f64>,
}

impl ModalityProfile {
    pub fn for_modality(modality: Modality) -> Self {
        match modality {
            Modality::Ct => Self {
                rescale_intercept: -1024,
                rescale_slope: 1,
                window_center: 400,
                window_width: 1000,
                slice_thickness: Some(1.0),
                pixel_spacing: Some((0.5, 0.5)),
                kvp: Some(120),
                ..Self::full_range()
            },
            Modality::Mr => Self {
                slice_thickness: Some(2.0),
                pixel_spacing: Some((0.8, 0.8)),
                magnetic_field_strength: Some(1.5),
                repetition_time: Some(500.0),
                echo_time: Some(15.0),
                ..Self::full_range()
            },
            Modality::Us => Self::full_range(),
        }
    }

    /// Identity rescale with a window spanning every 16-bit value.
    fn full_range() -> Self {
        Self {
            rescale_intercept: 0,
            rescale_slope: 1,
            window_center: 32768,
            window_width: 65536,
            slice_thickness: None,
            pixel_spacing: None,
            kvp: None,
            magnetic_field_strength: None,
            repetition_time: None,
            echo_time: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ct_profile() {
        let p = ModalityProfile::for_modality(Modality::Ct);
        assert_eq!((p.rescale_intercept, p.rescale_slope), (-1024, 1));
        assert_eq!((p.window_center, p.window_width), (400, 1000));
        assert_eq!(p.slice_thickness, Some(1.0));
        assert_eq!(p.pixel_spacing, Some((0.5, 0.5)));
        assert_eq!(p.kvp, Some(120));
        assert_eq!(p.magnetic_field_strength, None);
    }

    #[test]
    fn test_mr_profile() {
        let p = ModalityProfile::for_modality(Modality::Mr);
        assert_eq!(p.rescale_intercept, 0);
        assert_eq!((p.window_center, p.window_width), (32768, 65536));
        assert_eq!(p.slice_thickness, Some(2.0));
        assert_eq!(p.pixel_spacing, Some((0.8, 0.8)));
        assert_eq!(p.magnetic_field_strength, Some(1.5));
        assert_eq!(p.repetition_time, Some(500.0));
        assert_eq!(p.echo_time, Some(15.0));
        assert_eq!(p.kvp, None);
    }

    #[test]
    fn test_us_profile_has_window_only() {
        let p = ModalityProfile::for_modality(Modality::Us);
        assert_eq!((p.rescale_intercept, p.rescale_slope), (0, 1));
        assert_eq!((p.window_center, p.window_width), (32768, 65536));
        assert_eq!(p.slice_thickness, None);
        assert_eq!(p.pixel_spacing, None);
    }
}

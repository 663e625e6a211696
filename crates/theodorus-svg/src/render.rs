//! Folding spiral steps into markup.

use theodorus_geometry::{SpiralParameters, Theodorus};
use tracing::debug;

use crate::element::{self, Rotation};
use crate::mapping::{PixelMapper, Triangle};
use crate::{Frames, Result};

/// Pixel triangles for every step, in order.
pub fn triangles(params: &SpiralParameters) -> Result<Vec<Triangle>> {
    params.validate()?;
    let mapper = PixelMapper::new(params);
    Ok(Theodorus::take_steps(params.step_count)
        .map(|step| mapper.triangle(&step))
        .collect())
}

/// Render the whole spiral as one standalone SVG document.
///
/// Background first, then one outline per step, inside a root element
/// sized `canvas_size × canvas_size`.
pub fn render_document(params: &SpiralParameters) -> Result<String> {
    let triangles = triangles(params)?;

    let mut document = element::document_open(params.canvas_size);
    document.push_str(&element::background(params.canvas_size));
    let mut document = triangles.iter().fold(document, |mut out, triangle| {
        out.push_str(&element::polygon(triangle));
        out
    });
    document.push_str(element::document_close());

    debug!(
        steps = params.step_count,
        bytes = document.len(),
        "rendered static document"
    );
    Ok(document)
}

/// Render one cumulative fragment per level with the default rotation.
pub fn render_frames(params: &SpiralParameters) -> Result<Frames> {
    render_frames_with(params, &Rotation::default())
}

/// Render one cumulative fragment per level.
///
/// Fragment `k` is the settled outlines of steps `0..k-1` followed by step
/// `k-1` carrying `rotation`. The previous newest polygon drops its
/// animation when the next one arrives.
pub fn render_frames_with(params: &SpiralParameters, rotation: &Rotation) -> Result<Frames> {
    let triangles = triangles(params)?;
    let background = element::background(params.canvas_size);

    let levels = triangles.iter().scan(background.clone(), |settled, triangle| {
        let mut fragment = String::with_capacity(settled.len() + 256);
        fragment.push_str(settled);
        fragment.push_str(&element::animated_polygon(triangle, rotation));
        settled.push_str(&element::polygon(triangle));
        Some(fragment)
    });
    let fragments: Vec<String> = std::iter::once(background).chain(levels).collect();

    debug!(
        steps = params.step_count,
        levels = fragments.len(),
        "rendered animation frames"
    );
    Ok(Frames::new(params.canvas_size, fragments))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Error;

    fn scenario() -> SpiralParameters {
        SpiralParameters::new(13, 230.0, 230.0 / 8.0)
    }

    #[test]
    fn static_document_counts() {
        let document = render_document(&scenario()).unwrap();
        assert_eq!(document.matches("<polygon ").count(), 13);
        assert_eq!(document.matches("<rect ").count(), 1);
        assert!(!document.contains("animateTransform"));
        assert!(document.starts_with("<svg height=\"230\" width=\"230\""));
        assert!(document.ends_with("</svg>\n"));
    }

    #[test]
    fn static_document_without_steps_is_background_only() {
        let params = SpiralParameters::new(0, 230.0, 10.0);
        let document = render_document(&params).unwrap();
        assert_eq!(
            document,
            format!(
                "{}{}</svg>\n",
                element::document_open(230.0),
                element::background(230.0)
            )
        );
    }

    #[test]
    fn frames_without_steps_is_single_background() {
        let params = SpiralParameters::new(0, 230.0, 10.0);
        let frames = render_frames(&params).unwrap();
        assert_eq!(frames.len(), 1);
        assert_eq!(frames.level(0), Some(element::background(230.0).as_str()));
    }

    #[test]
    fn frame_count_is_steps_plus_one() {
        let frames = render_frames(&scenario()).unwrap();
        assert_eq!(frames.len(), 14);
        for (level, fragment) in frames.iter().enumerate() {
            assert_eq!(fragment.matches("<polygon ").count(), level);
            assert_eq!(fragment.matches("<animateTransform ").count(), level.min(1));
            assert!(!fragment.contains("<svg"));
        }
    }

    #[test]
    fn only_newest_polygon_rotates() {
        let frames = render_frames(&scenario()).unwrap();
        let last = frames.last().unwrap();
        let animation = last.find("<animateTransform").unwrap();
        assert_eq!(last[animation..].matches("<polygon ").count(), 0);
        assert!(last.ends_with("</polygon>"));
    }

    #[test]
    fn invalid_parameters_render_nothing() {
        let params = SpiralParameters::new(5, -1.0, 10.0);
        assert!(matches!(
            render_document(&params),
            Err(Error::InvalidParameter(_))
        ));
        assert!(matches!(
            render_frames(&params),
            Err(Error::InvalidParameter(_))
        ));
    }

    #[test]
    fn triangles_follow_steps() {
        let triangles = triangles(&scenario()).unwrap();
        assert_eq!(triangles.len(), 13);
        assert_eq!(triangles[0].to_string(), "115,115 144,115 144,144");
        assert_eq!(triangles[12].to_string(), "115,115 154,19 181,30");
    }
}

//! Scatter plot of classified points on a Cartesian grid, drawn with
//! `plotters`.
//!
//! The plane origin sits at the image center, one unit spans `scale`
//! pixels and the y axis points up. White axes are drawn over a black
//! background, then every point as a small filled square: red for class 1,
//! blue otherwise.
//!
//! ```rust
//! use perceptron_viz::{PlotConfig, SamplePoint};
//! use perceptron_viz::plot::render_svg;
//!
//! let points = [SamplePoint { x: 1.0, y: 0.5, class: 1.0 }];
//! let svg = render_svg(&PlotConfig::new(), points).unwrap();
//! assert!(svg.contains("<svg"));
//! ```

use crate::dataset::SamplePoint;
use crate::error::PerceptronError;
use plotters::coord::Shift;
use plotters::drawing::DrawingAreaErrorKind;
use plotters::prelude::*;
use std::path::Path;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Marker {
    Red,
    Blue,
}

impl Marker {
    pub fn for_class(class: f32) -> Self {
        if class == 1.0 { Marker::Red } else { Marker::Blue }
    }

    pub fn color(&self) -> RGBColor {
        match self {
            Marker::Red => RED,
            Marker::Blue => BLUE,
        }
    }
}

#[derive(Clone, Debug)]
pub struct PlotConfig {
    width: u32,
    height: u32,
    scale: f32,
    point_size: u32,
}

impl PlotConfig {
    pub fn new() -> Self {
        Self {
            width: 480,
            height: 480,
            scale: 15.0,
            point_size: 3,
        }
    }

    pub fn width(mut self, width: u32) -> Self {
        if width == 0 {
            panic!("width must be > 0, got {}", width);
        }
        self.width = width;
        self
    }

    pub fn height(mut self, height: u32) -> Self {
        if height == 0 {
            panic!("height must be > 0, got {}", height);
        }
        self.height = height;
        self
    }

    /// Pixels per plane unit.
    pub fn scale(mut self, scale: f32) -> Self {
        if !(scale > 0.0) {
            panic!("scale must be positive, got {}", scale);
        }
        self.scale = scale;
        self
    }

    pub fn point_size(mut self, point_size: u32) -> Self {
        self.point_size = point_size;
        self
    }

    pub fn size(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    /// Pixel position of the plane origin.
    pub fn center(&self) -> (i32, i32) {
        ((self.width / 2) as i32, (self.height / 2) as i32)
    }

    /// Maps a plane coordinate to a pixel with the y axis flipped. Points
    /// outside the image are left to the backend to clip.
    pub fn to_screen(&self, x: f32, y: f32) -> (i32, i32) {
        let (cx, cy) = self.center();
        let px = cx as f32 + x * self.scale;
        let py = cy as f32 - y * self.scale;
        (px.floor() as i32, py.floor() as i32)
    }
}

impl Default for PlotConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// Draws the background, axes and `points` onto `area`.
pub fn draw_points<DB, I>(
    area: &DrawingArea<DB, Shift>,
    config: &PlotConfig,
    points: I,
) -> Result<(), DrawingAreaErrorKind<DB::ErrorType>>
where
    DB: DrawingBackend,
    I: IntoIterator<Item = SamplePoint>,
{
    let (width, height) = (config.width as i32, config.height as i32);
    let (cx, cy) = config.center();

    area.fill(&BLACK)?;
    area.draw(&Rectangle::new([(0, cy), (width, cy + 1)], WHITE.filled()))?;
    area.draw(&Rectangle::new([(cx, 0), (cx + 1, height)], WHITE.filled()))?;

    let size = config.point_size as i32;
    for point in points {
        let (x, y) = config.to_screen(point.x, point.y);
        let color = Marker::for_class(point.class).color();
        area.draw(&Rectangle::new([(x, y), (x + size, y + size)], color.filled()))?;
    }

    Ok(())
}

fn render_error<E>(err: DrawingAreaErrorKind<E>) -> PerceptronError
where
    E: std::error::Error + Send + Sync,
{
    PerceptronError::Render(err.to_string())
}

pub fn save_svg<P, I>(path: P, config: &PlotConfig, points: I) -> Result<(), PerceptronError>
where
    P: AsRef<Path>,
    I: IntoIterator<Item = SamplePoint>,
{
    let root = SVGBackend::new(path.as_ref(), config.size()).into_drawing_area();
    draw_points(&root, config, points).map_err(render_error)?;
    root.present().map_err(render_error)
}

pub fn render_svg<I>(config: &PlotConfig, points: I) -> Result<String, PerceptronError>
where
    I: IntoIterator<Item = SamplePoint>,
{
    let mut svg = String::new();
    {
        let root = SVGBackend::with_string(&mut svg, config.size()).into_drawing_area();
        draw_points(&root, config, points).map_err(render_error)?;
        root.present().map_err(render_error)?;
    }
    Ok(svg)
}

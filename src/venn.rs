//! Static Venn diagrams of two or three sets.
//!
//! Circle areas are proportional to the set sizes and each pairwise overlap
//! approximates the size of the intersection. Three-set layouts honor the
//! pairwise overlaps only, so the triple region is approximate.

use std::collections::HashMap;
use std::f64::consts::PI;
use std::fs;
use std::hash::Hash;
use std::path::{Path, PathBuf};

use crate::error::{PlotlyLightError, Result, ensure_len};
use crate::renderer::{self, HTML_MIME_TYPE, MimeBundle, TEXT_MIME_TYPE};
use crate::svg::{Circle, SvgBuilder, Text};

pub const SVG_MIME_TYPE: &str = "image/svg+xml";

const POINTS_PER_INCH: f64 = 72.0;
const LABEL_FONT_PT: f64 = 10.0;
const TITLE_FONT_PT: f64 = 12.0;
/// Samples per axis when searching for region label positions.
const GRID: usize = 200;
const BISECTION_STEPS: usize = 100;

#[derive(Debug, Clone)]
pub struct VennOptions {
    /// Fill color per set; white when unset.
    pub colors: Option<Vec<String>>,
    pub line_color: String,
    /// Circle outline width in points.
    pub line_width: f64,
    /// Opacity of the circle fills.
    pub opacity: f64,
    /// Size in pixels.
    pub width: f64,
    pub height: f64,
    /// Fonts and lines are sized in points and scale with `dpi`.
    pub dpi: f64,
    pub title: String,
    /// `.svg` or `.html` file to write the diagram to.
    pub out_fname: Option<PathBuf>,
    /// Skip displaying the diagram.
    pub no_plot: bool,
}

impl Default for VennOptions {
    fn default() -> Self {
        Self {
            colors: None,
            line_color: "black".to_string(),
            line_width: 0.5,
            opacity: 1.0,
            width: 500.0,
            height: 500.0,
            dpi: 300.0,
            title: String::new(),
            out_fname: None,
            no_plot: false,
        }
    }
}

/// A rendered Venn diagram with its region counts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VennDiagram {
    labels: Vec<String>,
    /// Exclusive region sizes indexed by set membership bit mask.
    regions: Vec<usize>,
    svg: String,
}

impl VennDiagram {
    #[must_use]
    pub fn svg(&self) -> &str {
        &self.svg
    }

    #[must_use]
    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    /// Number of elements in exactly the sets `sets` (by index) and no other.
    ///
    /// Unknown set indices yield 0.
    #[must_use]
    pub fn region_count(&self, sets: &[usize]) -> usize {
        if sets.iter().any(|&set| set >= self.labels.len()) {
            return 0;
        }
        let mask = sets.iter().fold(0, |mask, set| mask | (1 << set));
        self.regions.get(mask).copied().unwrap_or(0)
    }

    /// Unknown set indices yield 0.
    #[must_use]
    pub fn set_size(&self, set: usize) -> usize {
        if set >= self.labels.len() {
            return 0;
        }
        set_size(&self.regions, set)
    }

    #[must_use]
    pub fn to_mime_bundle(&self) -> MimeBundle {
        let summary = self
            .labels
            .iter()
            .enumerate()
            .map(|(i, label)| format!("{label} ({})", self.set_size(i)))
            .collect::<Vec<_>>()
            .join(", ");
        MimeBundle::new()
            .with(SVG_MIME_TYPE, self.svg.clone())
            .with(HTML_MIME_TYPE, self.svg.clone())
            .with(TEXT_MIME_TYPE, format!("Venn diagram: {summary}"))
    }

    /// Write the diagram as `.svg` or as an `.html` page embedding it.
    ///
    /// # Errors
    /// Returns an error for other extensions or when writing fails.
    pub fn save(&self, path: &Path) -> Result<()> {
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(str::to_ascii_lowercase);
        let contents = match extension.as_deref() {
            Some("svg") => self.svg.clone(),
            Some("html") => format!(
                "<html>\n<head><meta charset=\"utf-8\" /></head>\n<body>\n{}\n</body>\n</html>\n",
                self.svg
            ),
            _ => return Err(PlotlyLightError::UnsupportedFormat(path.display().to_string())),
        };
        fs::write(path, contents)?;
        tracing::debug!(path = %path.display(), "wrote venn diagram");
        Ok(())
    }

    pub fn show(&self) {
        renderer::publish(&self.to_mime_bundle());
    }
}

/// Draw a Venn diagram of two or three sets.
///
/// Duplicates within a set count once. The diagram is written to
/// `out_fname` when given and displayed unless `no_plot` is set.
///
/// # Errors
/// Returns an error when there are not 2 or 3 sets, when `labels` or
/// `colors` do not match the number of sets, when every set is empty, or
/// when the output file cannot be written.
pub fn venn<D, T, L>(data: &[D], labels: &[L], options: &VennOptions) -> Result<VennDiagram>
where
    for<'a> &'a D: IntoIterator<Item = &'a T>,
    T: Eq + Hash,
    L: AsRef<str>,
{
    let n = data.len();
    if !(2..=3).contains(&n) {
        return Err(PlotlyLightError::invalid_option(
            "data",
            format!("{n} sets"),
            "2 or 3 sets",
        ));
    }
    ensure_len("labels", labels.len(), "# of sets", n)?;
    if let Some(colors) = &options.colors {
        ensure_len("colors", colors.len(), "# of sets", n)?;
    }

    let regions = region_counts(data);
    if regions.iter().all(|&count| count == 0) {
        return Err(PlotlyLightError::EmptyData);
    }

    let labels: Vec<String> = labels.iter().map(|label| label.as_ref().to_string()).collect();
    let circles = place_circles(&regions, n);
    let svg = render(&circles, &regions, &labels, options);
    let diagram = VennDiagram {
        labels,
        regions,
        svg,
    };

    if let Some(path) = &options.out_fname {
        diagram.save(path)?;
    }
    if !options.no_plot {
        diagram.show();
    }
    Ok(diagram)
}

fn region_counts<D, T>(data: &[D]) -> Vec<usize>
where
    for<'a> &'a D: IntoIterator<Item = &'a T>,
    T: Eq + Hash,
{
    let mut membership: HashMap<&T, usize> = HashMap::new();
    for (i, set) in data.iter().enumerate() {
        for item in set {
            *membership.entry(item).or_default() |= 1 << i;
        }
    }
    let mut regions = vec![0; 1 << data.len()];
    for mask in membership.into_values() {
        regions[mask] += 1;
    }
    regions
}

fn set_size(regions: &[usize], set: usize) -> usize {
    regions
        .iter()
        .enumerate()
        .filter(|(mask, _)| mask & (1 << set) != 0)
        .map(|(_, count)| count)
        .sum()
}

fn overlap_size(regions: &[usize], a: usize, b: usize) -> usize {
    let both = (1 << a) | (1 << b);
    regions
        .iter()
        .enumerate()
        .filter(|(mask, _)| mask & both == both)
        .map(|(_, count)| count)
        .sum()
}

#[derive(Debug, Clone, Copy, PartialEq)]
struct Disk {
    x: f64,
    y: f64,
    r: f64,
}

impl Disk {
    fn contains(&self, x: f64, y: f64) -> bool {
        (x - self.x).hypot(y - self.y) < self.r
    }

    fn clearance(&self, x: f64, y: f64) -> f64 {
        ((x - self.x).hypot(y - self.y) - self.r).abs()
    }
}

/// Area of the intersection of two circles at distance `d`.
fn lens_area(r1: f64, r2: f64, d: f64) -> f64 {
    if d >= r1 + r2 {
        return 0.0;
    }
    if d <= (r1 - r2).abs() {
        return PI * r1.min(r2).powi(2);
    }
    let a1 = ((d * d + r1 * r1 - r2 * r2) / (2.0 * d * r1)).clamp(-1.0, 1.0).acos();
    let a2 = ((d * d + r2 * r2 - r1 * r1) / (2.0 * d * r2)).clamp(-1.0, 1.0).acos();
    let kite = ((-d + r1 + r2) * (d + r1 - r2) * (d - r1 + r2) * (d + r1 + r2)).max(0.0);
    0.5f64.mul_add(-kite.sqrt(), r1 * r1 * a1 + r2 * r2 * a2)
}

/// Center distance at which two circles overlap by `overlap` area.
fn solve_distance(r1: f64, r2: f64, overlap: f64) -> f64 {
    let (mut lo, mut hi) = ((r1 - r2).abs(), r1 + r2);
    if overlap <= 0.0 {
        return hi;
    }
    if overlap >= lens_area(r1, r2, lo) {
        return lo;
    }
    for _ in 0..BISECTION_STEPS {
        let mid = (lo + hi) / 2.0;
        if lens_area(r1, r2, mid) > overlap {
            lo = mid;
        } else {
            hi = mid;
        }
    }
    (lo + hi) / 2.0
}

#[allow(clippy::cast_precision_loss)]
fn place_circles(regions: &[usize], n: usize) -> Vec<Disk> {
    let radii: Vec<f64> = (0..n)
        .map(|i| (set_size(regions, i) as f64 / PI).sqrt())
        .collect();
    let distance = |a: usize, b: usize| {
        solve_distance(radii[a], radii[b], overlap_size(regions, a, b) as f64)
    };

    let d01 = distance(0, 1);
    let mut disks = vec![
        Disk { x: 0.0, y: 0.0, r: radii[0] },
        Disk { x: d01, y: 0.0, r: radii[1] },
    ];
    if n == 3 {
        let (d02, d12) = (distance(0, 2), distance(1, 2));
        // third center from the two distances; below the first two
        let x = if d01 > f64::EPSILON {
            (d02 * d02 - d12 * d12 + d01 * d01) / (2.0 * d01)
        } else {
            0.0
        };
        let y = (d02 * d02 - x * x).max(0.0).sqrt();
        disks.push(Disk { x, y, r: radii[2] });
    }
    disks
}

/// Point inside the region farthest from every circle outline.
#[allow(clippy::cast_precision_loss)]
fn region_anchor(disks: &[Disk], mask: usize, bounds: &Bounds) -> Option<(f64, f64)> {
    let step_x = bounds.width() / GRID as f64;
    let step_y = bounds.height() / GRID as f64;
    let mut best: Option<(f64, (f64, f64))> = None;
    for i in 0..GRID {
        for j in 0..GRID {
            let x = (i as f64 + 0.5).mul_add(step_x, bounds.min_x);
            let y = (j as f64 + 0.5).mul_add(step_y, bounds.min_y);
            let inside = disks
                .iter()
                .enumerate()
                .filter(|(_, disk)| disk.contains(x, y))
                .fold(0, |acc, (k, _)| acc | (1 << k));
            if inside != mask {
                continue;
            }
            let clearance = disks
                .iter()
                .map(|disk| disk.clearance(x, y))
                .fold(f64::INFINITY, f64::min);
            if best.is_none_or(|(score, _)| clearance > score) {
                best = Some((clearance, (x, y)));
            }
        }
    }
    best.map(|(_, point)| point)
}

#[derive(Debug, Clone, Copy)]
struct Bounds {
    min_x: f64,
    min_y: f64,
    max_x: f64,
    max_y: f64,
}

impl Bounds {
    fn of(disks: &[Disk]) -> Self {
        disks.iter().fold(
            Self {
                min_x: f64::INFINITY,
                min_y: f64::INFINITY,
                max_x: f64::NEG_INFINITY,
                max_y: f64::NEG_INFINITY,
            },
            |b, d| Self {
                min_x: b.min_x.min(d.x - d.r),
                min_y: b.min_y.min(d.y - d.r),
                max_x: b.max_x.max(d.x + d.r),
                max_y: b.max_y.max(d.y + d.r),
            },
        )
    }

    fn width(&self) -> f64 {
        (self.max_x - self.min_x).max(f64::EPSILON)
    }

    fn height(&self) -> f64 {
        (self.max_y - self.min_y).max(f64::EPSILON)
    }
}

/// Maps diagram units to pixels.
struct Frame {
    scale: f64,
    offset_x: f64,
    offset_y: f64,
}

impl Frame {
    fn point(&self, x: f64, y: f64) -> (f64, f64) {
        (
            x.mul_add(self.scale, self.offset_x),
            y.mul_add(self.scale, self.offset_y),
        )
    }
}

fn render(disks: &[Disk], regions: &[usize], labels: &[String], options: &VennOptions) -> String {
    let px_per_pt = options.dpi / POINTS_PER_INCH;
    let font = LABEL_FONT_PT * px_per_pt;
    let title_font = TITLE_FONT_PT * px_per_pt;
    let title_height = if options.title.is_empty() { 0.0 } else { 2.0 * title_font };
    let pad = 2.0 * font;

    let bounds = Bounds::of(disks);
    let avail_w = 2.0f64.mul_add(-pad, options.width).max(1.0);
    let avail_h = 2.0f64.mul_add(-pad, options.height - title_height).max(1.0);
    let scale = (avail_w / bounds.width()).min(avail_h / bounds.height());
    let frame = Frame {
        scale,
        offset_x: options.width / 2.0 - (bounds.min_x + bounds.max_x) / 2.0 * scale,
        offset_y: title_height + pad + avail_h / 2.0 - (bounds.min_y + bounds.max_y) / 2.0 * scale,
    };

    let mut builder = SvgBuilder::new(options.width, options.height).with_background("white");
    if !options.title.is_empty() {
        let title = Text::new(options.width / 2.0, title_font, options.title.clone())
            .with_font_size(title_font);
        builder = builder
            .with_title(options.title.clone())
            .push_element(&title);
    }

    for (i, disk) in disks.iter().enumerate() {
        let (cx, cy) = frame.point(disk.x, disk.y);
        let fill = options
            .colors
            .as_ref()
            .map_or("white", |colors| colors[i].as_str());
        let circle = Circle::new(cx, cy, disk.r * scale)
            .with_fill(fill, options.opacity)
            .with_stroke("none", 0.0)
            .with_title(format!("{} ({})", labels[i], set_size(regions, i)));
        builder = builder.push_element(&circle);
    }
    for disk in disks {
        let (cx, cy) = frame.point(disk.x, disk.y);
        let outline = Circle::new(cx, cy, disk.r * scale)
            .with_stroke(options.line_color.clone(), options.line_width * px_per_pt);
        builder = builder.push_element(&outline);
    }

    for (mask, &count) in regions.iter().enumerate().skip(1) {
        if count == 0 {
            continue;
        }
        match region_anchor(disks, mask, &bounds) {
            Some((x, y)) => {
                let (x, y) = frame.point(x, y);
                let text = Text::new(x, y, count.to_string()).with_font_size(font);
                builder = builder.push_element(&text);
            }
            None => tracing::debug!(mask, count, "venn region too small to label"),
        }
    }

    for (i, label) in labels.iter().enumerate() {
        let (x, y) = set_label_position(disks, i, &frame, font);
        builder = builder.push_element(&Text::new(x, y, label.clone()).with_font_size(font));
    }

    builder.build()
}

/// Two sets are labelled below their circles, three sets outward from the
/// center of the diagram.
#[allow(clippy::cast_precision_loss)]
fn set_label_position(disks: &[Disk], i: usize, frame: &Frame, font: f64) -> (f64, f64) {
    let disk = disks[i];
    let (cx, cy) = frame.point(disk.x, disk.y);
    let gap = disk.r.mul_add(frame.scale, font);
    if disks.len() == 2 {
        return (cx, cy + gap);
    }
    let n = disks.len() as f64;
    let center_x = disks.iter().map(|d| d.x).sum::<f64>() / n;
    let center_y = disks.iter().map(|d| d.y).sum::<f64>() / n;
    let (dx, dy) = (disk.x - center_x, disk.y - center_y);
    let norm = dx.hypot(dy);
    if norm <= f64::EPSILON {
        return (cx, cy + gap);
    }
    ((dx / norm).mul_add(gap, cx), (dy / norm).mul_add(gap, cy))
}

#[cfg(test)]
#[path = "venn_tests.rs"]
mod tests;

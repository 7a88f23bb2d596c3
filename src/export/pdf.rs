// src/export/pdf.rs

use crate::core::summary::StatusTotals;
use crate::errors::{AppError, AppResult};
use crate::export::background::{BackgroundCache, TemplateImage, load_template};
use crate::export::model::ExportDay;
use crate::export::pdf_surface::PdfSurface;
use crate::models::duty_status::DutyStatus;
use crate::render::duty_path::{RenderStyle, draw, draw_grid, layout_day};
use crate::render::geometry::{DayLayout, GridGeometry, PageTransform, Point};
use crate::utils::colors::hex_to_rgb;
use pdf_writer::{Content, Filter, Finish, Name, Pdf, Rect, Ref, Str};
use std::fs::File;
use std::io::Write;
use std::path::{Path, PathBuf};

pub const PAGE_WIDTH: f64 = 900.0;
pub const PAGE_HEIGHT: f64 = 360.0;

/// Where the chart canvas sits on the page (top-left, y down).
pub const CHART_ORIGIN: Point = Point::new(0.0, 60.0);

/// Extra room left of the plot so the status legend stays on the canvas.
pub const LABEL_GUTTER: f64 = 20.0;

/// Chart canvas used by the export, shifted right by the label gutter.
/// Narrower than the page so the totals column fits on the right.
pub fn export_geometry() -> GridGeometry {
    GridGeometry::new(800.0, 280.0, 50.0).with_offset(LABEL_GUTTER, 0.0)
}

// Fixed header coordinates (page units, y down).
const TITLE_POS: Point = Point::new(50.0, 30.0);
const MONTH_X: f64 = 330.0;
const DAY_X: f64 = 400.0;
const YEAR_X: f64 = 460.0;
const MILES_X: f64 = 600.0;
const HEADER_VALUE_Y: f64 = 30.0;
const HEADER_LABEL_Y: f64 = 46.0;
const TOTALS_X: f64 = 830.0;

const FONT_REGULAR: Name<'static> = Name(b"F1");
const FONT_BOLD: Name<'static> = Name(b"F2");
const CHART_NAME: Name<'static> = Name(b"Chart");
const BACKGROUND_NAME: Name<'static> = Name(b"Bg");

/// Paginated driver-log document: one landscape page per day.
pub struct LogDocument {
    pdf: Pdf,
    catalog_id: Ref,
    pages_id: Ref,
    page_refs: Vec<Ref>,

    next_id: i32,
    font_id: Ref,
    bold_font_id: Ref,

    geometry: GridGeometry,
    background: BackgroundCache<Ref>,
}

impl LogDocument {
    pub fn new(background: Option<PathBuf>) -> Self {
        Self::with_geometry(export_geometry(), background)
    }

    pub fn with_geometry(geometry: GridGeometry, background: Option<PathBuf>) -> Self {
        let mut pdf = Pdf::new();

        let catalog_id = Ref::new(1);
        let pages_id = Ref::new(2);
        let font_id = Ref::new(3);
        let bold_font_id = Ref::new(4);
        let next_id = 5;

        pdf.type1_font(font_id).base_font(Name(b"Helvetica"));
        pdf.type1_font(bold_font_id).base_font(Name(b"Helvetica-Bold"));

        Self {
            pdf,
            catalog_id,
            pages_id,
            page_refs: Vec::new(),
            next_id,
            font_id,
            bold_font_id,
            geometry,
            background: BackgroundCache::new(background),
        }
    }

    pub fn page_count(&self) -> usize {
        self.page_refs.len()
    }

    fn fresh_ref(&mut self) -> Ref {
        alloc_ref(&mut self.next_id)
    }

    /// Embed the background template on first use and hand back its ref;
    /// every later page reuses the same image object.
    fn background_ref(&mut self) -> AppResult<Option<Ref>> {
        let pdf = &mut self.pdf;
        let next_id = &mut self.next_id;
        self.background.get_or_load(|path| {
            let template = load_template(path)?;
            Ok(embed_template(pdf, next_id, &template))
        })
    }

    /// Offscreen chart: a form XObject in canvas space, pre-filled with the
    /// background template (or the grid when there is none), with the duty
    /// path on top.
    fn write_chart(&mut self, day: &ExportDay) -> AppResult<Ref> {
        let bg = self.background_ref()?;
        let form_id = self.fresh_ref();
        let g = self.geometry;
        let (w, h) = (g.outer_width() as f32, g.outer_height() as f32);

        let mut content = Content::new();

        match bg {
            Some(_) => {
                content.save_state();
                content.transform([w, 0.0, 0.0, h, 0.0, 0.0]);
                content.x_object(BACKGROUND_NAME);
                content.restore_state();
            }
            None => {
                content.save_state();
                content.set_fill_gray(1.0);
                content.rect(0.0, 0.0, w, h);
                content.fill_nonzero();
                content.restore_state();
            }
        }

        // Canvas space from here on: origin top-left, y down.
        content.transform([1.0, 0.0, 0.0, -1.0, 0.0, h]);

        let layout = DayLayout::new(g, day.midnight);
        let ops = layout_day(&day.entries, &layout);
        {
            let mut surface = PdfSurface::new(&mut content, FONT_REGULAR);
            if bg.is_none() {
                draw_grid(&g, &mut surface);
            }
            draw(&ops, &day.entries, &mut surface, RenderStyle::EXPORT);
        }

        let data = content.finish();
        let mut form = self.pdf.form_xobject(form_id, &data);
        form.bbox(Rect::new(0.0, 0.0, w, h));
        let mut resources = form.resources();
        resources.fonts().pair(FONT_REGULAR, self.font_id);
        if let Some(bg_id) = bg {
            resources.x_objects().pair(BACKGROUND_NAME, bg_id);
        }
        resources.finish();
        form.finish();

        Ok(form_id)
    }

    /// Append one page for `day`.
    pub fn add_day(&mut self, day: &ExportDay) -> AppResult<()> {
        let [d, m, y] = split_date(&day.date)?;
        let chart_id = self.write_chart(day)?;

        let page_id = self.fresh_ref();
        let content_id = self.fresh_ref();
        self.page_refs.push(page_id);

        let page_space = PageTransform::new(Point::default(), PAGE_HEIGHT);
        let chart_space = PageTransform::new(CHART_ORIGIN, PAGE_HEIGHT);

        let mut content = Content::new();

        // Composite the chart.
        content.save_state();
        content.transform(chart_space.placement(self.geometry.outer_height()));
        content.x_object(CHART_NAME);
        content.restore_state();

        // Header
        draw_text(
            &mut content,
            &page_space,
            TITLE_POS,
            FONT_BOLD,
            16.0,
            "#111111",
            "Driver's Daily Log",
        );
        for (x, value, label) in [(MONTH_X, m, "Month"), (DAY_X, d, "Day"), (YEAR_X, y, "Year")] {
            draw_text(
                &mut content,
                &page_space,
                Point::new(x, HEADER_VALUE_Y),
                FONT_BOLD,
                16.0,
                "#111111",
                value,
            );
            draw_text(
                &mut content,
                &page_space,
                Point::new(x, HEADER_LABEL_Y),
                FONT_REGULAR,
                8.0,
                "#6b7280",
                label,
            );
        }
        draw_text(
            &mut content,
            &page_space,
            Point::new(MILES_X, HEADER_VALUE_Y),
            FONT_BOLD,
            16.0,
            "#111111",
            &format!("{:.2}", day.total_miles),
        );
        draw_text(
            &mut content,
            &page_space,
            Point::new(MILES_X, HEADER_LABEL_Y),
            FONT_REGULAR,
            8.0,
            "#6b7280",
            "Total miles driving today",
        );

        // Totals, one per status row.
        let totals = StatusTotals::from_entries(&day.entries);
        draw_text(
            &mut content,
            &chart_space,
            Point::new(TOTALS_X, self.geometry.top() - 8.0),
            FONT_REGULAR,
            8.0,
            "#6b7280",
            "Total hours",
        );
        for status in DutyStatus::ALL {
            draw_text(
                &mut content,
                &chart_space,
                Point::new(TOTALS_X, self.geometry.status_to_y(status) + 5.0),
                FONT_BOLD,
                16.0,
                status.color(),
                &totals.formatted(status),
            );
        }

        self.pdf.stream(content_id, &content.finish());

        let mut page = self.pdf.page(page_id);
        page.parent(self.pages_id)
            .media_box(Rect::new(0.0, 0.0, PAGE_WIDTH as f32, PAGE_HEIGHT as f32))
            .contents(content_id);
        let mut resources = page.resources();
        resources
            .fonts()
            .pair(FONT_REGULAR, self.font_id)
            .pair(FONT_BOLD, self.bold_font_id);
        resources.x_objects().pair(CHART_NAME, chart_id);
        resources.finish();
        page.finish();

        log::debug!("page {} written for {}", self.page_refs.len(), day.date);
        Ok(())
    }

    /// Serialize the whole document. Nothing touches the disk before this.
    pub fn finish(mut self) -> Vec<u8> {
        self.pdf.catalog(self.catalog_id).pages(self.pages_id);
        let count = self.page_refs.len() as i32;
        self.pdf
            .pages(self.pages_id)
            .count(count)
            .kids(self.page_refs.iter().copied());
        self.pdf.finish()
    }

    pub fn save(self, path: &Path) -> AppResult<()> {
        let bytes = self.finish();
        let mut f = File::create(path)?;
        f.write_all(&bytes)?;
        Ok(())
    }
}

fn alloc_ref(next_id: &mut i32) -> Ref {
    let id = *next_id;
    *next_id += 1;
    Ref::new(id)
}

/// Write the template as an RGB image XObject (plus a soft mask for its
/// alpha channel).
fn embed_template(pdf: &mut Pdf, next_id: &mut i32, template: &TemplateImage) -> Ref {
    let image_id = alloc_ref(next_id);
    let mask_id = template.alpha.as_ref().map(|_| alloc_ref(next_id));

    let mut image = pdf.image_xobject(image_id, &template.rgb);
    image.filter(Filter::FlateDecode);
    image.width(template.width as i32);
    image.height(template.height as i32);
    image.color_space().device_rgb();
    image.bits_per_component(8);
    if let Some(mask_id) = mask_id {
        image.s_mask(mask_id);
    }
    image.finish();

    if let (Some(mask_id), Some(alpha)) = (mask_id, &template.alpha) {
        let mut mask = pdf.image_xobject(mask_id, alpha);
        mask.filter(Filter::FlateDecode);
        mask.width(template.width as i32);
        mask.height(template.height as i32);
        mask.color_space().device_gray();
        mask.bits_per_component(8);
        mask.finish();
    }

    image_id
}

/// "DD/MM/YYYY" → [day, month, year].
fn split_date(date: &str) -> AppResult<[&str; 3]> {
    let parts: Vec<&str> = date.split('/').collect();
    match parts.as_slice() {
        [d, m, y] if !d.is_empty() && !m.is_empty() && !y.is_empty() => Ok([*d, *m, *y]),
        _ => Err(AppError::Export(format!(
            "expected a DD/MM/YYYY date, got '{date}'"
        ))),
    }
}

fn draw_text(
    content: &mut Content,
    space: &PageTransform,
    at: Point,
    font: Name<'static>,
    size: f32,
    color: &str,
    text: &str,
) {
    let p = space.apply(at);
    let (r, g, b) = hex_to_rgb(color);
    content.save_state();
    content.set_fill_rgb(r, g, b);
    content.begin_text();
    content.set_font(font, size);
    content.set_text_matrix([1.0, 0.0, 0.0, 1.0, p.x as f32, p.y as f32]);
    content.show(Str(text.as_bytes()));
    content.end_text();
    content.restore_state();
}


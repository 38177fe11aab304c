use super::{format, StrategyReport, FINANCIAL_HEAD, STRATEGY_HEAD};
use anyhow::Context;
use printpdf::{
    BuiltinFont, Color, IndirectFontRef, Line, Mm, PdfDocument, PdfDocumentReference,
    PdfLayerReference, Point, Rgb,
};

const PAGE_WIDTH_MM: f32 = 210.0;
const PAGE_HEIGHT_MM: f32 = 297.0;
const MARGIN_MM: f32 = 14.0;
const BOTTOM_MARGIN_MM: f32 = 18.0;
const LINE_STEP_MM: f32 = 6.0;

// Column anchors for the three-column tables.
const COL_X_MM: [f32; 3] = [MARGIN_MM, 74.0, 120.0];

// Content width at 11pt Helvetica comfortably fits ~90 characters.
const WRAP_CHARS: usize = 90;

const FOOTER_TEXT: &str = "Powered by FinPulse AI Advisor";

struct Fonts {
    regular: IndirectFontRef,
    bold: IndirectFontRef,
    italic: IndirectFontRef,
}

/// Top-down cursor over A4 pages; adds a fresh page when a block would
/// cross the bottom margin.
struct PageWriter<'a> {
    doc: &'a PdfDocumentReference,
    layer: PdfLayerReference,
    y: f32,
}

impl<'a> PageWriter<'a> {
    fn ensure_room(&mut self, needed_mm: f32) {
        if self.y - needed_mm < BOTTOM_MARGIN_MM {
            let (page, layer) =
                self.doc
                    .add_page(Mm(PAGE_WIDTH_MM), Mm(PAGE_HEIGHT_MM), "Layer 1");
            self.layer = self.doc.get_page(page).get_layer(layer);
            self.y = PAGE_HEIGHT_MM - MARGIN_MM;
        }
    }

    fn text(&self, s: &str, size: f32, x: f32, font: &IndirectFontRef) {
        self.layer.use_text(s, size, Mm(x), Mm(self.y), font);
    }

    fn set_color(&self, r: f32, g: f32, b: f32) {
        self.layer
            .set_fill_color(Color::Rgb(Rgb::new(r, g, b, None)));
    }

    fn advance(&mut self, step_mm: f32) {
        self.y -= step_mm;
    }

    fn divider(&self) {
        self.layer.set_outline_thickness(0.5);
        self.layer
            .set_outline_color(Color::Rgb(Rgb::new(0.78, 0.78, 0.78, None)));
        self.layer.add_line(Line {
            points: vec![
                (Point::new(Mm(MARGIN_MM), Mm(self.y)), false),
                (Point::new(Mm(PAGE_WIDTH_MM - MARGIN_MM), Mm(self.y)), false),
            ],
            is_closed: false,
        });
    }

    fn table(&mut self, head: &[&str; 3], rows: &[[String; 3]], fonts: &Fonts) {
        self.ensure_room(LINE_STEP_MM * (rows.len() as f32 + 1.0));
        self.set_color(0.16, 0.50, 0.73);
        for (col, cell) in head.iter().enumerate() {
            self.text(cell, 10.0, COL_X_MM[col], &fonts.bold);
        }
        self.advance(LINE_STEP_MM);

        self.set_color(0.0, 0.0, 0.0);
        for row in rows {
            for (col, cell) in row.iter().enumerate() {
                self.text(cell, 10.0, COL_X_MM[col], &fonts.regular);
            }
            self.advance(LINE_STEP_MM);
        }
    }

    fn section_heading(&mut self, title: &str, fonts: &Fonts, color: (f32, f32, f32)) {
        self.ensure_room(LINE_STEP_MM * 3.0);
        self.advance(4.0);
        self.set_color(color.0, color.1, color.2);
        self.text(title, 14.0, MARGIN_MM, &fonts.bold);
        self.advance(LINE_STEP_MM + 2.0);
    }
}

impl StrategyReport {
    /// Renders the assembled document to a PDF byte blob. Writing the blob
    /// to disk (the `save` side of the contract) is the caller's concern.
    pub fn to_pdf_bytes(&self) -> anyhow::Result<Vec<u8>> {
        let (doc, page, layer) = PdfDocument::new(
            "Strategic Financial Plan",
            Mm(PAGE_WIDTH_MM),
            Mm(PAGE_HEIGHT_MM),
            "Layer 1",
        );
        let fonts = Fonts {
            regular: doc
                .add_builtin_font(BuiltinFont::Helvetica)
                .context("failed to load Helvetica")?,
            bold: doc
                .add_builtin_font(BuiltinFont::HelveticaBold)
                .context("failed to load Helvetica-Bold")?,
            italic: doc
                .add_builtin_font(BuiltinFont::HelveticaOblique)
                .context("failed to load Helvetica-Oblique")?,
        };

        let mut writer = PageWriter {
            layer: doc.get_page(page).get_layer(layer),
            doc: &doc,
            y: PAGE_HEIGHT_MM - MARGIN_MM - 6.0,
        };

        // Header.
        writer.set_color(0.16, 0.50, 0.73);
        writer.text("Strategic Financial Plan", 22.0, MARGIN_MM, &fonts.bold);
        writer.advance(8.0);
        writer.set_color(0.39, 0.39, 0.39);
        writer.text(
            &format!("Generated for: {}", self.company_name),
            10.0,
            MARGIN_MM,
            &fonts.regular,
        );
        writer.advance(5.0);
        writer.text(
            &format!("Date: {}", self.generated_on.format("%Y-%m-%d")),
            10.0,
            MARGIN_MM,
            &fonts.regular,
        );
        writer.advance(5.0);
        writer.divider();
        writer.advance(6.0);

        // Section 1: the plan itself.
        writer.section_heading("1. Proposed Strategy", &fonts, (0.0, 0.0, 0.0));
        writer.table(&STRATEGY_HEAD, &self.strategy_rows, &fonts);

        // Section 2: baseline vs projected figures.
        writer.section_heading("2. Financial Projection", &fonts, (0.0, 0.0, 0.0));
        writer.table(&FINANCIAL_HEAD, &self.financial_rows, &fonts);

        // Section 3: narrative critique, italic to set it off from the tables.
        writer.section_heading("3. CFO Risk Assessment", &fonts, (0.75, 0.22, 0.17));
        writer.set_color(0.2, 0.2, 0.2);
        for line in format::wrap_words(&self.critique, WRAP_CHARS) {
            writer.ensure_room(5.0);
            writer.text(&line, 11.0, MARGIN_MM, &fonts.italic);
            writer.advance(5.0);
        }

        // Footer on the final page.
        writer.y = 10.0;
        writer.set_color(0.59, 0.59, 0.59);
        writer.text(FOOTER_TEXT, 8.0, MARGIN_MM, &fonts.regular);

        drop(writer);
        doc.save_to_bytes().context("failed to serialize PDF")
    }
}

//! Page layout — turns the static content into styled terminal rows.
//!
//! The [`Document`] is rebuilt every frame for the current width, palette,
//! and animation state.  It is one tall column of full-width lines; the
//! viewport decides which slice is on screen.  Alongside the lines it keeps
//! the row where each [`Section`] starts and the clickable [`LinkZone`]s.

use std::path::Path;

use ratatui::{
    style::{Color, Modifier, Style},
    text::{Line, Span},
};

use crate::core::{
    content::{LinkTarget, EXPERIENCE, PROFILE, PROJECTS, SKILLS},
    section::Section,
    text::{display_width, truncate, wrap},
};

use super::motion::{Motion, ABOUT_RISE, HERO_RISE};
use super::theme::Palette;

/// Widest the content column gets, in columns.
const MAX_CONTENT_WIDTH: usize = 96;
/// Minimum margin either side of the content column.
const GUTTER: usize = 2;
/// Space between grid cards.
const GRID_GAP: usize = 2;
/// Portrait placeholder width when shown beside the hero text.
const PORTRAIT_WIDTH: usize = 24;

/// A clickable span of one document row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LinkZone {
    pub row: usize,
    pub x: usize,
    pub width: usize,
    pub target: LinkTarget,
}

/// The laid-out page.
#[derive(Debug, Clone)]
pub struct Document {
    lines: Vec<Line<'static>>,
    anchors: Vec<(Section, usize)>,
    links: Vec<LinkZone>,
}

impl Document {
    /// Lay out every section, in order, for a terminal `width` columns wide.
    pub fn build(width: u16, palette: &Palette, motion: &Motion, assets: &Path) -> Self {
        let mut b = Builder::new(width as usize, palette);

        b.hero(motion, assets);
        b.about(motion);
        b.skills();
        b.projects();
        b.experience();

        Self {
            lines: b.lines,
            anchors: b.anchors,
            links: b.links,
        }
    }

    pub fn lines(&self) -> &[Line<'static>] {
        &self.lines
    }

    pub fn height(&self) -> usize {
        self.lines.len()
    }

    pub fn links(&self) -> &[LinkZone] {
        &self.links
    }

    /// First row of `section`.
    pub fn anchor(&self, section: Section) -> usize {
        self.anchors
            .iter()
            .find(|(s, _)| *s == section)
            .map_or(0, |(_, row)| *row)
    }

    /// The section that `row` falls in.
    pub fn section_at(&self, row: usize) -> Section {
        self.anchors
            .iter()
            .take_while(|(_, start)| *start <= row)
            .last()
            .map_or(Section::Hero, |(s, _)| *s)
    }

    /// Link under document position (`row`, `col`), if any.
    pub fn link_at(&self, row: usize, col: usize) -> Option<LinkTarget> {
        self.links
            .iter()
            .find(|z| z.row == row && col >= z.x && col < z.x + z.width)
            .map(|z| z.target)
    }

    /// The page as unstyled text, one row per line, trailing space trimmed.
    pub fn plain_text(&self) -> String {
        let mut out = String::new();
        for line in &self.lines {
            let row: String = line.spans.iter().map(|s| s.content.as_ref()).collect();
            out.push_str(row.trim_end());
            out.push('\n');
        }
        out
    }
}

// ───────────────────────────────────────── cells ─────────────

/// A fixed-width block of rows, every row padded to exactly `width`.
struct Cell {
    width: usize,
    bg: Color,
    rows: Vec<Vec<Span<'static>>>,
    /// (row, x, width, target) relative to the cell.
    links: Vec<(usize, usize, usize, LinkTarget)>,
}

impl Cell {
    fn new(width: usize, bg: Color) -> Self {
        Self {
            width,
            bg,
            rows: Vec::new(),
            links: Vec::new(),
        }
    }

    fn line(&mut self, spans: Vec<Span<'static>>) {
        self.line_at(0, spans);
    }

    fn line_at(&mut self, indent: usize, spans: Vec<Span<'static>>) {
        let used = indent + spans_width(&spans);
        let mut row = Vec::with_capacity(spans.len() + 2);
        if indent > 0 {
            row.push(fill(self.bg, indent));
        }
        row.extend(spans);
        if used < self.width {
            row.push(fill(self.bg, self.width - used));
        }
        self.rows.push(row);
    }

    fn centered(&mut self, spans: Vec<Span<'static>>) {
        let indent = self.width.saturating_sub(spans_width(&spans)) / 2;
        self.line_at(indent, spans);
    }

    fn blank(&mut self) {
        self.line(Vec::new());
    }

    /// Wrapped paragraph, every row in `style`.
    fn paragraph(&mut self, text: &str, style: Style, center: bool) {
        for row in wrap(text, self.width) {
            let spans = vec![Span::styled(row, style)];
            if center {
                self.centered(spans);
            } else {
                self.line(spans);
            }
        }
    }

    /// Lay buttons out left to right, wrapping onto new rows as needed.
    fn buttons(&mut self, buttons: Vec<(Span<'static>, LinkTarget)>, center: bool) {
        let mut pending: Vec<(Span<'static>, LinkTarget)> = Vec::new();
        let mut pending_w = 0;

        for (span, target) in buttons {
            let w = display_width(&span.content);
            let extra = if pending.is_empty() { w } else { w + 2 };
            if !pending.is_empty() && pending_w + extra > self.width {
                self.button_row(std::mem::take(&mut pending), pending_w, center);
                pending_w = 0;
            }
            pending_w += if pending.is_empty() { w } else { w + 2 };
            pending.push((span, target));
        }
        if !pending.is_empty() {
            self.button_row(pending, pending_w, center);
        }
    }

    fn button_row(&mut self, row: Vec<(Span<'static>, LinkTarget)>, row_w: usize, center: bool) {
        let indent = if center {
            self.width.saturating_sub(row_w) / 2
        } else {
            0
        };
        let row_idx = self.rows.len();
        let mut x = indent;
        let mut spans = Vec::new();
        for (i, (span, target)) in row.into_iter().enumerate() {
            if i > 0 {
                spans.push(fill(self.bg, 2));
                x += 2;
            }
            let w = display_width(&span.content);
            self.links.push((row_idx, x, w, target));
            spans.push(span);
            x += w;
        }
        self.line_at(indent, spans);
    }

    fn pad_to(&mut self, height: usize) {
        while self.rows.len() < height {
            self.blank();
        }
    }
}

// ───────────────────────────────────────── builder ───────────

struct Builder<'p> {
    width: usize,
    palette: &'p Palette,
    lines: Vec<Line<'static>>,
    anchors: Vec<(Section, usize)>,
    links: Vec<LinkZone>,
}

impl<'p> Builder<'p> {
    fn new(width: usize, palette: &'p Palette) -> Self {
        Self {
            width,
            palette,
            lines: Vec::new(),
            anchors: Vec::new(),
            links: Vec::new(),
        }
    }

    /// Content column: (left margin, width).
    fn column(&self) -> (usize, usize) {
        let inner = self
            .width
            .saturating_sub(GUTTER * 2)
            .clamp(1, MAX_CONTENT_WIDTH);
        (self.width.saturating_sub(inner) / 2, inner)
    }

    fn blank(&mut self, bg: Color) {
        self.lines.push(Line::from(fill(bg, self.width)));
    }

    fn blanks(&mut self, bg: Color, n: usize) {
        for _ in 0..n {
            self.blank(bg);
        }
    }

    /// Append `cells` side by side, starting `indent` columns in.
    fn emit(&mut self, indent: usize, mut cells: Vec<Cell>, gap: usize, bg: Color) {
        let height = cells.iter().map(|c| c.rows.len()).max().unwrap_or(0);
        for cell in &mut cells {
            cell.pad_to(height);
        }

        let first_row = self.lines.len();
        let mut x = indent;
        for (i, cell) in cells.iter().enumerate() {
            if i > 0 {
                x += gap;
            }
            for &(row, cx, w, target) in &cell.links {
                self.links.push(LinkZone {
                    row: first_row + row,
                    x: x + cx,
                    width: w,
                    target,
                });
            }
            x += cell.width;
        }

        for r in 0..height {
            let mut spans = Vec::new();
            if indent > 0 {
                spans.push(fill(bg, indent));
            }
            let mut used = indent;
            for (i, cell) in cells.iter_mut().enumerate() {
                if i > 0 {
                    spans.push(fill(bg, gap));
                    used += gap;
                }
                spans.append(&mut cell.rows[r]);
                used += cell.width;
            }
            if used < self.width {
                spans.push(fill(bg, self.width - used));
            }
            self.lines.push(Line::from(spans));
        }
    }

    fn emit_column(&mut self, cell: Cell, bg: Color) {
        let (left, _) = self.column();
        self.emit(left, vec![cell], 0, bg);
    }

    fn heading(&mut self, section: Section, bg: Color) {
        if let Some(title) = section.heading() {
            let (_, inner) = self.column();
            let mut cell = Cell::new(inner, bg);
            cell.centered(vec![Span::styled(
                title.to_string(),
                self.palette.heading_on(bg),
            )]);
            cell.blank();
            self.emit_column(cell, bg);
        }
    }

    fn dim_rows(&mut self, from: usize) {
        for line in &mut self.lines[from..] {
            for span in &mut line.spans {
                span.style = span.style.add_modifier(Modifier::DIM);
            }
        }
    }

    // ── sections ──────────────────────────────────────────────

    fn hero(&mut self, motion: &Motion, assets: &Path) {
        let p = self.palette;
        let bg = p.surface;
        let start = self.lines.len();
        self.anchors.push((Section::Hero, start));

        let rise = motion.hero.row_offset().clamp(0, HERO_RISE) as usize;
        self.blanks(bg, 1 + rise);

        let (left, inner) = self.column();
        let side_by_side = inner >= 80;
        let text_w = if side_by_side {
            inner - PORTRAIT_WIDTH - GRID_GAP * 2
        } else {
            inner
        };
        let center = !side_by_side;

        let mut text = Cell::new(text_w, bg);
        let headline = vec![Span::styled(
            PROFILE.headline.to_string(),
            p.accent_on(bg).add_modifier(Modifier::BOLD),
        )];
        let greeting = vec![
            Span::styled("Hi, I'm ".to_string(), p.heading_on(bg)),
            Span::styled(
                PROFILE.name.to_string(),
                p.accent_on(bg).add_modifier(Modifier::BOLD),
            ),
            Span::styled(" 👋".to_string(), p.text_on(bg)),
        ];
        if center {
            text.centered(headline);
            text.blank();
            text.centered(greeting);
        } else {
            text.line(headline);
            text.blank();
            text.line(greeting);
        }
        text.blank();
        text.paragraph(PROFILE.intro, p.muted_on(bg), center);
        text.blank();
        let buttons = LinkTarget::ALL
            .iter()
            .map(|&target| {
                let style = match target {
                    LinkTarget::Resume => p.primary_button(),
                    _ => p.outline_button(bg),
                };
                (Span::styled(format!("[ {} ]", target.label()), style), target)
            })
            .collect();
        text.buttons(buttons, center);

        let portrait_w = if side_by_side {
            PORTRAIT_WIDTH
        } else {
            PORTRAIT_WIDTH.min(inner)
        };
        let portrait = portrait_cell(portrait_w, bg, p, assets);

        if side_by_side {
            self.emit(left, vec![text, portrait], GRID_GAP * 2, bg);
        } else {
            self.emit(left, vec![text], 0, bg);
            self.blank(bg);
            let indent = left + inner.saturating_sub(portrait_w) / 2;
            self.emit(indent, vec![portrait], 0, bg);
        }

        self.blanks(bg, 1 + HERO_RISE as usize - rise);
        if motion.hero.is_faded() {
            self.dim_rows(start);
        }
    }

    fn about(&mut self, motion: &Motion) {
        let p = self.palette;
        let bg = p.surface;
        let start = self.lines.len();
        self.anchors.push((Section::About, start));

        let rise = motion.about.row_offset().clamp(0, ABOUT_RISE) as usize;
        self.blanks(bg, 1 + rise);
        self.heading(Section::About, bg);

        let (_, inner) = self.column();
        let text_w = inner.min(72);
        let mut cell = Cell::new(text_w, bg);
        for (i, para) in PROFILE.about.iter().enumerate() {
            if i > 0 {
                cell.blank();
            }
            cell.paragraph(para, p.muted_on(bg), true);
        }
        let (left, _) = self.column();
        self.emit(left + (inner - text_w) / 2, vec![cell], 0, bg);

        self.blanks(bg, 1 + ABOUT_RISE as usize - rise);
        if motion.about.is_faded() {
            self.dim_rows(start);
        }
    }

    fn skills(&mut self) {
        let p = self.palette;
        let bg = p.background;
        let card_bg = p.surface;
        self.anchors.push((Section::Skills, self.lines.len()));
        self.blank(bg);
        self.heading(Section::Skills, bg);

        let (_, inner) = self.column();
        let cols = match inner {
            w if w >= 90 => 3,
            w if w >= 56 => 2,
            _ => 1,
        };
        let card_w = card_width(inner, cols);
        let contents: Vec<Vec<Vec<Span<'static>>>> = SKILLS
            .iter()
            .map(|skill| {
                let mut rows = Vec::new();
                for line in wrap(skill.title, card_w.saturating_sub(4)) {
                    rows.push(vec![Span::styled(
                        line,
                        p.accent_on(card_bg).add_modifier(Modifier::BOLD),
                    )]);
                }
                for line in wrap(skill.description, card_w.saturating_sub(4)) {
                    rows.push(vec![Span::styled(line, p.muted_on(card_bg))]);
                }
                rows
            })
            .collect();

        self.grid(contents, cols, card_w, bg, card_bg);
        self.blank(bg);
    }

    fn projects(&mut self) {
        let p = self.palette;
        let bg = p.surface;
        let card_bg = p.background;
        self.anchors.push((Section::Projects, self.lines.len()));
        self.blank(bg);
        self.heading(Section::Projects, bg);

        let (_, inner) = self.column();
        let cols = if inner >= 84 { 3 } else { 1 };
        let card_w = card_width(inner, cols);
        let content_w = card_w.saturating_sub(4);
        let contents: Vec<Vec<Vec<Span<'static>>>> = PROJECTS
            .iter()
            .map(|project| {
                let mut rows = Vec::new();
                for line in wrap(project.title, content_w) {
                    rows.push(vec![Span::styled(line, p.heading_on(card_bg))]);
                }
                rows.push(Vec::new());
                for point in project.bullet_points {
                    for (i, line) in wrap(point, content_w.saturating_sub(2)).into_iter().enumerate() {
                        let bullet = if i == 0 { "• " } else { "  " };
                        rows.push(vec![
                            Span::styled(bullet.to_string(), p.muted_on(card_bg)),
                            Span::styled(line, p.muted_on(card_bg)),
                        ]);
                    }
                }
                rows.push(Vec::new());
                let tech = format!("Tech: {}", project.tech_stack);
                for line in wrap(&tech, content_w) {
                    rows.push(vec![Span::styled(line, p.accent_on(card_bg))]);
                }
                rows
            })
            .collect();

        self.grid(contents, cols, card_w, bg, card_bg);
        self.blank(bg);
    }

    fn experience(&mut self) {
        let p = self.palette;
        let bg = p.background;
        self.anchors.push((Section::Experience, self.lines.len()));
        self.blank(bg);
        self.heading(Section::Experience, bg);

        let (left, inner) = self.column();
        let rule = || Span::styled("┃   ".to_string(), p.accent_on(bg));
        let text_w = inner.saturating_sub(4).max(1);
        let mut cell = Cell::new(inner, bg);

        for (i, entry) in EXPERIENCE.iter().enumerate() {
            if i > 0 {
                cell.line(vec![rule()]);
            }
            let role = Span::styled(truncate(entry.role_title, text_w), p.heading_on(bg));
            let org = Span::styled(format!(" — {}", entry.organization), p.muted_on(bg));
            if display_width(entry.role_title) + display_width(&org.content) <= text_w {
                cell.line(vec![rule(), role, org]);
            } else {
                cell.line(vec![rule(), role]);
                let org_line = truncate(&format!("— {}", entry.organization), text_w);
                cell.line(vec![rule(), Span::styled(org_line, p.muted_on(bg))]);
            }
            cell.line(vec![
                rule(),
                Span::styled(entry.date_range.to_string(), p.muted_on(bg)),
            ]);
            if !entry.description.is_empty() {
                for line in wrap(entry.description, text_w) {
                    cell.line(vec![rule(), Span::styled(line, p.muted_on(bg))]);
                }
            }
        }
        self.emit(left, vec![cell], 0, bg);
        self.blank(bg);
    }

    /// Cards in rows of `cols`, each row as tall as its tallest card.
    fn grid(
        &mut self,
        contents: Vec<Vec<Vec<Span<'static>>>>,
        cols: usize,
        card_w: usize,
        bg: Color,
        card_bg: Color,
    ) {
        let (left, _) = self.column();
        let mut iter = contents.into_iter().peekable();
        let mut first = true;
        while iter.peek().is_some() {
            let chunk: Vec<_> = iter.by_ref().take(cols).collect();
            let tallest = chunk.iter().map(Vec::len).max().unwrap_or(0);
            let cards = chunk
                .into_iter()
                .map(|rows| card(card_w, card_bg, rows, tallest, self.palette))
                .collect();
            if !first {
                self.blank(bg);
            }
            first = false;
            self.emit(left, cards, GRID_GAP, bg);
        }
    }
}

// ───────────────────────────────────────── helpers ───────────

fn fill(bg: Color, n: usize) -> Span<'static> {
    Span::styled(" ".repeat(n), Style::default().bg(bg))
}

fn spans_width(spans: &[Span<'_>]) -> usize {
    spans.iter().map(|s| display_width(&s.content)).sum()
}

fn card_width(inner: usize, cols: usize) -> usize {
    let cols = cols.max(1);
    (inner.saturating_sub(GRID_GAP * (cols - 1)) / cols).max(5)
}

/// A rounded card of `width` columns holding `content`, padded to
/// `content_rows` rows inside the border.
fn card(
    width: usize,
    bg: Color,
    content: Vec<Vec<Span<'static>>>,
    content_rows: usize,
    palette: &Palette,
) -> Cell {
    let border = palette.border_on(bg);
    let inner_w = width.saturating_sub(4);
    let mut cell = Cell::new(width, bg);

    let horizontal = "─".repeat(width.saturating_sub(2));
    cell.line(vec![Span::styled(format!("╭{horizontal}╮"), border)]);
    let mut content = content;
    content.resize_with(content_rows.max(content.len()), Vec::new);
    for row in content {
        let used = spans_width(&row);
        let mut spans = vec![Span::styled("│ ".to_string(), border)];
        spans.extend(row);
        if used < inner_w {
            spans.push(fill(bg, inner_w - used));
        }
        spans.push(Span::styled(" │".to_string(), border));
        cell.line(spans);
    }
    cell.line(vec![Span::styled(format!("╰{horizontal}╯"), border)]);
    cell
}

/// Framed placeholder for the profile photo.  The image itself is an opaque
/// asset; only its alt text and location are shown.
fn portrait_cell(width: usize, bg: Color, palette: &Palette, assets: &Path) -> Cell {
    let frame = palette.accent_on(bg);
    let inner_w = width.saturating_sub(2);
    let mut cell = Cell::new(width, bg);
    let horizontal = "─".repeat(inner_w);

    let path = assets.join(PROFILE.portrait_file);
    let rows = [
        (String::new(), palette.text_on(bg)),
        ("◉".to_string(), frame),
        (String::new(), palette.text_on(bg)),
        (
            truncate(PROFILE.portrait_alt, inner_w),
            palette.heading_on(bg),
        ),
        (
            truncate(&path.display().to_string(), inner_w),
            palette.muted_on(bg),
        ),
        (String::new(), palette.text_on(bg)),
    ];

    cell.line(vec![Span::styled(format!("╭{horizontal}╮"), frame)]);
    for (text, style) in rows {
        let w = display_width(&text);
        let lpad = inner_w.saturating_sub(w) / 2;
        let rpad = inner_w.saturating_sub(w + lpad);
        cell.line(vec![
            Span::styled("│".to_string(), frame),
            fill(bg, lpad),
            Span::styled(text, style),
            fill(bg, rpad),
            Span::styled("│".to_string(), frame),
        ]);
    }
    cell.line(vec![Span::styled(format!("╰{horizontal}╯"), frame)]);
    cell
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;

    fn build(width: u16) -> Document {
        Document::build(width, &Palette::LIGHT, &Motion::settled(), Path::new("public"))
    }

    fn position_of(text: &str, needle: &str) -> usize {
        text.find(needle)
            .unwrap_or_else(|| panic!("{needle:?} missing from document"))
    }

    #[rstest]
    #[case(40)]
    #[case(80)]
    #[case(140)]
    fn every_row_spans_the_full_width(#[case] width: u16) {
        let doc = build(width);
        for (i, line) in doc.lines().iter().enumerate() {
            assert_eq!(line.width(), width as usize, "row {i} has the wrong width");
        }
    }

    #[rstest]
    #[case(40)]
    #[case(120)]
    fn sections_are_in_declared_order(#[case] width: u16) {
        let doc = build(width);
        let rows: Vec<usize> = Section::ALL.iter().map(|s| doc.anchor(*s)).collect();
        let mut sorted = rows.clone();
        sorted.sort_unstable();
        assert_eq!(rows, sorted);
        assert_eq!(rows[0], 0);
    }

    #[rstest]
    #[case(40)]
    #[case(120)]
    fn all_content_is_present_in_order(#[case] width: u16) {
        let text = build(width).plain_text();

        let mut last = 0;
        for skill in SKILLS {
            let at = position_of(&text, skill.title);
            assert!(at > last, "{} out of order", skill.title);
            last = at;
        }
        for project in PROJECTS {
            let at = position_of(&text, project.title);
            assert!(at > last, "{} out of order", project.title);
            last = at;
            for point in project.bullet_points {
                position_of(&text, point);
            }
        }
        for entry in EXPERIENCE {
            let at = position_of(&text, entry.role_title);
            assert!(at > last, "{} out of order", entry.role_title);
            last = at;
            position_of(&text, entry.date_range);
        }
    }

    #[test]
    fn single_column_cards_keep_bullets_whole() {
        let text = build(80).plain_text();
        for project in PROJECTS {
            for point in project.bullet_points {
                position_of(&text, &format!("• {point}"));
            }
            position_of(&text, &format!("Tech: {}", project.tech_stack));
        }
        for skill in SKILLS {
            position_of(&text, skill.description);
        }
    }

    #[test]
    fn hero_buttons_are_clickable() {
        let doc = build(120);
        assert_eq!(doc.links().len(), 3);
        for zone in doc.links() {
            assert_eq!(doc.link_at(zone.row, zone.x), Some(zone.target));
            assert_eq!(doc.link_at(zone.row, zone.x + zone.width - 1), Some(zone.target));
            let row: String = doc.lines()[zone.row]
                .spans
                .iter()
                .map(|s| s.content.as_ref())
                .collect();
            assert!(row.contains(zone.target.label()));
        }
        assert_eq!(doc.link_at(0, 0), None);
    }

    #[test]
    fn section_at_maps_rows_back_to_sections() {
        let doc = build(100);
        for &section in Section::ALL {
            assert_eq!(doc.section_at(doc.anchor(section)), section);
        }
        assert_eq!(doc.section_at(doc.height() - 1), Section::Experience);
    }

    #[test]
    fn layout_height_is_stable_while_animating() {
        let settled = build(100).height();
        let motion = Motion::new(true);
        let animating =
            Document::build(100, &Palette::LIGHT, &motion, Path::new("public")).height();
        assert_eq!(settled, animating);
    }

    #[test]
    fn faded_hero_is_dimmed() {
        let doc = Document::build(100, &Palette::LIGHT, &Motion::new(true), Path::new("public"));
        let hero_row = &doc.lines()[doc.anchor(Section::Hero)];
        assert!(hero_row.spans[0].style.add_modifier.contains(Modifier::DIM));

        let skills_row = &doc.lines()[doc.anchor(Section::Skills)];
        assert!(!skills_row.spans[0].style.add_modifier.contains(Modifier::DIM));
    }

    #[test]
    fn portrait_shows_alt_text_and_path() {
        let text = build(120).plain_text();
        position_of(&text, "Saaqib A");
        position_of(&text, "profile.jpg");
    }
}

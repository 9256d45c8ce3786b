//! Static font-metric tables for the PDF base-14 faces used by the renderer.
//!
//! Character widths are in em units (relative to font size), taken from the Adobe core font
//! metrics and rounded to three decimals. All tables cover ASCII 0x20..=0x7E
//! (95 printable characters). Index = (char as usize) - 32.
//!
//! Each face also lists the non-ASCII WinAnsi glyphs a German resume actually uses (umlauts,
//! ß, bullet, dashes). Anything else falls back to `average_char_width`.

use serde::{Deserialize, Serialize};

// ────────────────────────────────────────────────────────────────────────────
// Font family enum
// ────────────────────────────────────────────────────────────────────────────

/// The typeface families the renderer can use without embedding font files.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum FontFamily {
    /// Times-Roman / Times-Bold.
    #[default]
    Times,
    /// Helvetica / Helvetica-Bold.
    Helvetica,
}

impl FontFamily {
    /// The PDF `/BaseFont` name for the given weight.
    pub fn base_font(self, bold: bool) -> &'static str {
        match (self, bold) {
            (FontFamily::Times, false) => "Times-Roman",
            (FontFamily::Times, true) => "Times-Bold",
            (FontFamily::Helvetica, false) => "Helvetica",
            (FontFamily::Helvetica, true) => "Helvetica-Bold",
        }
    }
}

impl std::str::FromStr for FontFamily {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "times" => Ok(FontFamily::Times),
            "helvetica" => Ok(FontFamily::Helvetica),
            other => Err(format!("unknown font family '{other}' (expected times or helvetica)")),
        }
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Page configuration
// ────────────────────────────────────────────────────────────────────────────

/// Physical page geometry. Fixed configuration, never derived from the record.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PageConfig {
    pub font: FontFamily,
    pub page_width_pt: f32,
    pub page_height_pt: f32,
    /// Uniform margin on all four sides.
    pub margin_pt: f32,
}

impl PageConfig {
    pub fn text_width_pt(&self) -> f32 {
        self.page_width_pt - 2.0 * self.margin_pt
    }

    pub fn text_height_pt(&self) -> f32 {
        self.page_height_pt - 2.0 * self.margin_pt
    }
}

/// A4 (210 × 297 mm) with 1 cm margins.
pub fn default_page_config(font: FontFamily) -> PageConfig {
    PageConfig {
        font,
        page_width_pt: 595.28,
        page_height_pt: 841.89,
        margin_pt: 28.35,
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Font metric table
// ────────────────────────────────────────────────────────────────────────────

/// Static character-width table for one face.
///
/// `widths[i]` = width of ASCII character `(i + 32)`, covering 0x20 (space) through 0x7E (~).
///
/// Width array slot layout:
/// ```text
/// [0]=sp  [1]=!   [2]="   [3]=#   [4]=$   [5]=%   [6]=&   [7]='
/// [8]=(   [9]=)   [10]=*  [11]=+  [12]=,  [13]=-  [14]=.  [15]=/
/// [16..25]=0-9
/// [26]=:  [27]=;  [28]=<  [29]==  [30]=>  [31]=?  [32]=@
/// [33..58]=A-Z
/// [59]=[  [60]=\  [61]=]  [62]=^  [63]=_  [64]=`
/// [65..90]=a-z
/// [91]={  [92]=|  [93]=}  [94]=~
/// ```
pub struct FontMetricTable {
    widths: [f32; 95],
    /// Widths of selected characters above 0x7E.
    extra: &'static [(char, f32)],
    /// Fallback width for non-ASCII characters (codepoints > 0x7E).
    pub average_char_width: f32,
    pub space_width: f32,
}

impl FontMetricTable {
    /// Measures the rendered width of a string in em units.
    ///
    /// Characters in neither table fall back to `average_char_width`.
    pub fn measure_str(&self, s: &str) -> f32 {
        s.chars().map(|c| self.char_width(c)).sum()
    }

    fn char_width(&self, c: char) -> f32 {
        let code = c as usize;
        if (32..=126).contains(&code) {
            return self.widths[code - 32];
        }
        self.extra
            .iter()
            .find(|(glyph, _)| *glyph == c)
            .map(|(_, width)| *width)
            .unwrap_or(self.average_char_width)
    }

    /// Width of `s` in points at `size_pt`.
    pub fn width_pt(&self, s: &str, size_pt: f32) -> f32 {
        self.measure_str(s) * size_pt
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Static width tables  (95 ASCII printable characters each)
// ────────────────────────────────────────────────────────────────────────────

static TIMES_ROMAN_EXTRA: [(char, f32); 12] = [
    ('ä', 0.444),
    ('ö', 0.500),
    ('ü', 0.500),
    ('Ä', 0.722),
    ('Ö', 0.722),
    ('Ü', 0.722),
    ('ß', 0.500),
    ('é', 0.444),
    ('•', 0.350),
    ('–', 0.500),
    ('—', 1.000),
    ('€', 0.500),
];

static TIMES_ROMAN_TABLE: FontMetricTable = FontMetricTable {
    #[rustfmt::skip]
    widths: [
        // sp     !      "      #      $      %      &      '      (      )      *      +      ,      -      .      /
        0.250, 0.333, 0.408, 0.500, 0.500, 0.833, 0.778, 0.180, 0.333, 0.333, 0.500, 0.564, 0.250, 0.333, 0.250, 0.278,
        // 0      1      2      3      4      5      6      7      8      9
        0.500, 0.500, 0.500, 0.500, 0.500, 0.500, 0.500, 0.500, 0.500, 0.500,
        // :      ;      <      =      >      ?      @
        0.278, 0.278, 0.564, 0.564, 0.564, 0.444, 0.921,
        // A      B      C      D      E      F      G      H      I      J      K      L      M
        0.722, 0.667, 0.667, 0.722, 0.611, 0.556, 0.722, 0.722, 0.333, 0.389, 0.722, 0.611, 0.889,
        // N      O      P      Q      R      S      T      U      V      W      X      Y      Z
        0.722, 0.722, 0.556, 0.722, 0.667, 0.556, 0.611, 0.722, 0.722, 0.944, 0.722, 0.722, 0.611,
        // [      \      ]      ^      _      `
        0.333, 0.278, 0.333, 0.469, 0.500, 0.333,
        // a      b      c      d      e      f      g      h      i      j      k      l      m
        0.444, 0.500, 0.444, 0.500, 0.444, 0.333, 0.500, 0.500, 0.278, 0.278, 0.500, 0.278, 0.778,
        // n      o      p      q      r      s      t      u      v      w      x      y      z
        0.500, 0.500, 0.500, 0.500, 0.333, 0.389, 0.278, 0.500, 0.500, 0.722, 0.500, 0.500, 0.444,
        // {      |      }      ~
        0.480, 0.200, 0.480, 0.541,
    ],
    extra: &TIMES_ROMAN_EXTRA,
    average_char_width: 0.47,
    space_width: 0.25,
};

static TIMES_BOLD_EXTRA: [(char, f32); 12] = [
    ('ä', 0.500),
    ('ö', 0.500),
    ('ü', 0.556),
    ('Ä', 0.722),
    ('Ö', 0.778),
    ('Ü', 0.722),
    ('ß', 0.556),
    ('é', 0.444),
    ('•', 0.350),
    ('–', 0.500),
    ('—', 1.000),
    ('€', 0.500),
];

static TIMES_BOLD_TABLE: FontMetricTable = FontMetricTable {
    #[rustfmt::skip]
    widths: [
        // sp     !      "      #      $      %      &      '      (      )      *      +      ,      -      .      /
        0.250, 0.333, 0.555, 0.500, 0.500, 1.000, 0.833, 0.278, 0.333, 0.333, 0.500, 0.570, 0.250, 0.333, 0.250, 0.278,
        // 0      1      2      3      4      5      6      7      8      9
        0.500, 0.500, 0.500, 0.500, 0.500, 0.500, 0.500, 0.500, 0.500, 0.500,
        // :      ;      <      =      >      ?      @
        0.333, 0.333, 0.570, 0.570, 0.570, 0.500, 0.930,
        // A      B      C      D      E      F      G      H      I      J      K      L      M
        0.722, 0.667, 0.722, 0.722, 0.667, 0.611, 0.778, 0.778, 0.389, 0.500, 0.778, 0.667, 0.944,
        // N      O      P      Q      R      S      T      U      V      W      X      Y      Z
        0.722, 0.778, 0.611, 0.778, 0.722, 0.556, 0.667, 0.722, 0.722, 1.000, 0.722, 0.722, 0.667,
        // [      \      ]      ^      _      `
        0.333, 0.278, 0.333, 0.581, 0.500, 0.333,
        // a      b      c      d      e      f      g      h      i      j      k      l      m
        0.500, 0.556, 0.444, 0.556, 0.444, 0.333, 0.500, 0.556, 0.278, 0.333, 0.556, 0.278, 0.833,
        // n      o      p      q      r      s      t      u      v      w      x      y      z
        0.556, 0.500, 0.556, 0.556, 0.444, 0.389, 0.333, 0.556, 0.500, 0.722, 0.500, 0.500, 0.444,
        // {      |      }      ~
        0.394, 0.220, 0.394, 0.520,
    ],
    extra: &TIMES_BOLD_EXTRA,
    average_char_width: 0.50,
    space_width: 0.25,
};

static HELVETICA_EXTRA: [(char, f32); 12] = [
    ('ä', 0.556),
    ('ö', 0.556),
    ('ü', 0.556),
    ('Ä', 0.667),
    ('Ö', 0.778),
    ('Ü', 0.722),
    ('ß', 0.611),
    ('é', 0.556),
    ('•', 0.350),
    ('–', 0.556),
    ('—', 1.000),
    ('€', 0.556),
];

static HELVETICA_TABLE: FontMetricTable = FontMetricTable {
    #[rustfmt::skip]
    widths: [
        // sp     !      "      #      $      %      &      '      (      )      *      +      ,      -      .      /
        0.278, 0.278, 0.355, 0.556, 0.556, 0.889, 0.667, 0.191, 0.333, 0.333, 0.389, 0.584, 0.278, 0.333, 0.278, 0.278,
        // 0      1      2      3      4      5      6      7      8      9
        0.556, 0.556, 0.556, 0.556, 0.556, 0.556, 0.556, 0.556, 0.556, 0.556,
        // :      ;      <      =      >      ?      @
        0.278, 0.278, 0.584, 0.584, 0.584, 0.556, 1.015,
        // A      B      C      D      E      F      G      H      I      J      K      L      M
        0.667, 0.667, 0.722, 0.722, 0.667, 0.611, 0.778, 0.722, 0.278, 0.500, 0.667, 0.556, 0.833,
        // N      O      P      Q      R      S      T      U      V      W      X      Y      Z
        0.722, 0.778, 0.667, 0.778, 0.722, 0.667, 0.611, 0.722, 0.667, 0.944, 0.667, 0.667, 0.611,
        // [      \      ]      ^      _      `
        0.278, 0.278, 0.278, 0.469, 0.556, 0.333,
        // a      b      c      d      e      f      g      h      i      j      k      l      m
        0.556, 0.556, 0.500, 0.556, 0.556, 0.278, 0.556, 0.556, 0.222, 0.222, 0.500, 0.222, 0.833,
        // n      o      p      q      r      s      t      u      v      w      x      y      z
        0.556, 0.556, 0.556, 0.556, 0.333, 0.500, 0.278, 0.556, 0.500, 0.722, 0.500, 0.500, 0.500,
        // {      |      }      ~
        0.334, 0.260, 0.334, 0.584,
    ],
    extra: &HELVETICA_EXTRA,
    average_char_width: 0.53,
    space_width: 0.278,
};

static HELVETICA_BOLD_EXTRA: [(char, f32); 12] = [
    ('ä', 0.556),
    ('ö', 0.611),
    ('ü', 0.611),
    ('Ä', 0.722),
    ('Ö', 0.778),
    ('Ü', 0.722),
    ('ß', 0.611),
    ('é', 0.556),
    ('•', 0.350),
    ('–', 0.556),
    ('—', 1.000),
    ('€', 0.556),
];

static HELVETICA_BOLD_TABLE: FontMetricTable = FontMetricTable {
    #[rustfmt::skip]
    widths: [
        // sp     !      "      #      $      %      &      '      (      )      *      +      ,      -      .      /
        0.278, 0.333, 0.474, 0.556, 0.556, 0.889, 0.722, 0.238, 0.333, 0.333, 0.389, 0.584, 0.278, 0.333, 0.278, 0.278,
        // 0      1      2      3      4      5      6      7      8      9
        0.556, 0.556, 0.556, 0.556, 0.556, 0.556, 0.556, 0.556, 0.556, 0.556,
        // :      ;      <      =      >      ?      @
        0.333, 0.333, 0.584, 0.584, 0.584, 0.611, 0.975,
        // A      B      C      D      E      F      G      H      I      J      K      L      M
        0.722, 0.722, 0.722, 0.722, 0.667, 0.611, 0.778, 0.722, 0.278, 0.556, 0.722, 0.611, 0.833,
        // N      O      P      Q      R      S      T      U      V      W      X      Y      Z
        0.722, 0.778, 0.667, 0.778, 0.722, 0.667, 0.611, 0.722, 0.667, 0.944, 0.667, 0.667, 0.611,
        // [      \      ]      ^      _      `
        0.333, 0.278, 0.333, 0.584, 0.556, 0.333,
        // a      b      c      d      e      f      g      h      i      j      k      l      m
        0.556, 0.611, 0.556, 0.611, 0.556, 0.333, 0.611, 0.611, 0.278, 0.278, 0.556, 0.278, 0.889,
        // n      o      p      q      r      s      t      u      v      w      x      y      z
        0.611, 0.611, 0.611, 0.611, 0.389, 0.556, 0.333, 0.611, 0.556, 0.778, 0.556, 0.556, 0.500,
        // {      |      }      ~
        0.389, 0.280, 0.389, 0.584,
    ],
    extra: &HELVETICA_BOLD_EXTRA,
    average_char_width: 0.57,
    space_width: 0.278,
};

/// Returns the static metric table for a family and weight.
pub fn get_metrics(font: FontFamily, bold: bool) -> &'static FontMetricTable {
    match (font, bold) {
        (FontFamily::Times, false) => &TIMES_ROMAN_TABLE,
        (FontFamily::Times, true) => &TIMES_BOLD_TABLE,
        (FontFamily::Helvetica, false) => &HELVETICA_TABLE,
        (FontFamily::Helvetica, true) => &HELVETICA_BOLD_TABLE,
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_measure_str_empty_returns_zero() {
        let metrics = get_metrics(FontFamily::Times, false);
        assert_eq!(metrics.measure_str(""), 0.0);
    }

    #[test]
    fn test_measure_str_ascii_characters() {
        let metrics = get_metrics(FontFamily::Times, false);
        // "Rust" = R(0.667) + u(0.500) + s(0.389) + t(0.278) = 1.834
        let width = metrics.measure_str("Rust");
        assert!(
            (width - 1.834).abs() < 1e-3,
            "Rust width should be ~1.834, got {width}"
        );
    }

    #[test]
    fn test_measure_str_unlisted_non_ascii_falls_back() {
        let metrics = get_metrics(FontFamily::Helvetica, false);
        let width = metrics.measure_str("漢");
        assert!(
            (width - metrics.average_char_width).abs() < 1e-4,
            "unlisted characters should use average_char_width"
        );
    }

    #[test]
    fn test_measure_str_german_glyphs_use_afm_widths() {
        let times = get_metrics(FontFamily::Times, false);
        // "Fähigkeiten" = F(.556) ä(.444) h(.5) i(.278) g(.5) k(.5) e(.444) i(.278) t(.278) e(.444) n(.5)
        assert!((times.measure_str("Fähigkeiten") - 4.722).abs() < 1e-3);
        assert!((times.measure_str("•") - 0.350).abs() < 1e-4);
        assert!((times.measure_str("–") - 0.500).abs() < 1e-4);

        let helvetica_bold = get_metrics(FontFamily::Helvetica, true);
        assert!((helvetica_bold.measure_str("ß") - 0.611).abs() < 1e-4);
        assert!((helvetica_bold.measure_str("ü") - 0.611).abs() < 1e-4);
    }

    #[test]
    fn test_bold_is_not_narrower_than_regular() {
        let text = "Berufliche Erfahrung";
        for family in [FontFamily::Times, FontFamily::Helvetica] {
            let regular = get_metrics(family, false).measure_str(text);
            let bold = get_metrics(family, true).measure_str(text);
            assert!(bold >= regular, "{family:?}: bold {bold} < regular {regular}");
        }
    }

    #[test]
    fn test_width_pt_scales_with_size() {
        let metrics = get_metrics(FontFamily::Helvetica, true);
        let at_10 = metrics.width_pt("Resume", 10.0);
        let at_20 = metrics.width_pt("Resume", 20.0);
        assert!((at_20 - 2.0 * at_10).abs() < 1e-3);
    }

    #[test]
    fn test_base_font_names() {
        assert_eq!(FontFamily::Times.base_font(false), "Times-Roman");
        assert_eq!(FontFamily::Helvetica.base_font(true), "Helvetica-Bold");
    }

    #[test]
    fn test_font_family_from_str() {
        assert_eq!("Times".parse::<FontFamily>(), Ok(FontFamily::Times));
        assert_eq!(" helvetica ".parse::<FontFamily>(), Ok(FontFamily::Helvetica));
        assert!("comic".parse::<FontFamily>().is_err());
    }

    #[test]
    fn test_default_page_config_is_a4_with_small_margins() {
        let config = default_page_config(FontFamily::Times);
        assert!((config.page_width_pt - 595.28).abs() < 0.01);
        assert!((config.page_height_pt - 841.89).abs() < 0.01);
        assert!((config.text_width_pt() - 538.58).abs() < 0.01);
        assert!(config.text_height_pt() > 780.0);
    }
}

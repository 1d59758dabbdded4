//! Font description and the text-measurement seam.
//!
//! Real glyph shaping belongs to the platform's text stack; the dialog
//! layer only ever needs the *size* text will occupy. [`TextMeasurer`]
//! captures exactly that contract: word-wrapped measurement with no extra
//! padding. [`MetricTextMeasurer`] is the built-in implementation, a
//! deterministic per-advance model that is stable across platforms and
//! suitable for tests; embedders with a real text stack provide their own.

use unicode_segmentation::UnicodeSegmentation;

use crate::types::Size;

/// A generic font family.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum FontFamily {
    /// The platform's default UI sans-serif face.
    #[default]
    SansSerif,
    /// A serif face.
    Serif,
    /// A fixed-pitch face.
    Monospace,
    /// A specific named face.
    Named(String),
}

/// A font: family plus point size.
#[derive(Debug, Clone, PartialEq)]
pub struct Font {
    family: FontFamily,
    size: f32,
}

impl Font {
    /// Create a new font.
    pub fn new(family: FontFamily, size: f32) -> Self {
        Self { family, size }
    }

    /// Get the font family.
    pub fn family(&self) -> &FontFamily {
        &self.family
    }

    /// Get the point size.
    pub fn size(&self) -> f32 {
        self.size
    }
}

impl Default for Font {
    /// The message-box font: the platform UI face at 14pt.
    fn default() -> Self {
        Self::new(FontFamily::SansSerif, 14.0)
    }
}

/// Word-wrapped text measurement.
///
/// Implementations return the pixel size required to render `text` with
/// word-wrap against `max_width`, with no extra padding. Results are in
/// whole pixels so that downstream layout arithmetic stays exact.
pub trait TextMeasurer: Send + Sync {
    /// Measure `text` word-wrapped against `max_width`.
    ///
    /// Empty text measures as [`Size::ZERO`]. `max_width` may be
    /// `f32::MAX` for unbounded measurement.
    fn measure(&self, text: &str, font: &Font, max_width: f32) -> Size;

    /// The height of a single text line for `font`.
    fn line_height(&self, font: &Font) -> f32;
}

/// Deterministic metrics-based [`TextMeasurer`].
///
/// Advances are a fixed fraction of the font size (full-width for
/// non-ASCII), rounded to whole pixels per character. Wrapping is greedy on
/// `unicode-segmentation` word boundaries; a word wider than the budget is
/// broken at character level.
#[derive(Debug, Clone)]
pub struct MetricTextMeasurer {
    /// Advance of an ASCII character as a fraction of the font size.
    advance_ratio: f32,
    /// Line height as a fraction of the font size.
    line_spacing: f32,
}

impl MetricTextMeasurer {
    /// Create a measurer with explicit ratios.
    pub fn new(advance_ratio: f32, line_spacing: f32) -> Self {
        Self {
            advance_ratio,
            line_spacing,
        }
    }

    fn advance(&self, c: char, font: &Font) -> f32 {
        if c.is_ascii() {
            (font.size() * self.advance_ratio).round()
        } else {
            // Full-width characters occupy one em.
            font.size().round()
        }
    }

    fn word_width(&self, word: &str, font: &Font) -> f32 {
        word.chars().map(|c| self.advance(c, font)).sum()
    }
}

impl Default for MetricTextMeasurer {
    fn default() -> Self {
        Self::new(0.55, 1.4)
    }
}

impl TextMeasurer for MetricTextMeasurer {
    fn measure(&self, text: &str, font: &Font, max_width: f32) -> Size {
        if text.is_empty() {
            return Size::ZERO;
        }

        let line_height = self.line_height(font);
        let mut lines: u32 = 1;
        let mut current: f32 = 0.0;
        let mut widest: f32 = 0.0;

        for word in text.split_word_bounds() {
            if word == "\n" || word == "\r\n" {
                widest = widest.max(current);
                lines += 1;
                current = 0.0;
                continue;
            }

            let width = self.word_width(word, font);
            if current + width <= max_width {
                current += width;
            } else if word.trim().is_empty() {
                // A space that would overflow wraps without carrying over.
                widest = widest.max(current);
                lines += 1;
                current = 0.0;
            } else if width <= max_width {
                widest = widest.max(current);
                lines += 1;
                current = width;
            } else {
                // A single word wider than the budget breaks at char level.
                for c in word.chars() {
                    let advance = self.advance(c, font);
                    if current + advance > max_width && current > 0.0 {
                        widest = widest.max(current);
                        lines += 1;
                        current = 0.0;
                    }
                    current += advance;
                }
            }
        }
        widest = widest.max(current);

        Size::new(widest.min(max_width.max(0.0)), lines as f32 * line_height)
    }

    fn line_height(&self, font: &Font) -> f32 {
        (font.size() * self.line_spacing).round()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn measurer() -> MetricTextMeasurer {
        MetricTextMeasurer::default()
    }

    fn font() -> Font {
        Font::default()
    }

    #[test]
    fn test_empty_text_is_zero() {
        assert_eq!(measurer().measure("", &font(), f32::MAX), Size::ZERO);
    }

    #[test]
    fn test_single_line_unbounded() {
        let m = measurer();
        let size = m.measure("hello", &font(), f32::MAX);
        // 5 ASCII chars at round(14 * 0.55) = 8px each.
        assert_eq!(size.width, 40.0);
        assert_eq!(size.height, m.line_height(&font()));
    }

    #[test]
    fn test_wraps_on_word_boundary() {
        let m = measurer();
        let one_word = m.measure("hello", &font(), f32::MAX).width;
        let size = m.measure("hello hello hello", &font(), one_word + 10.0);
        // Each "hello " exceeds the budget together with the next word.
        assert!(size.height >= 3.0 * m.line_height(&font()));
        assert!(size.width <= one_word + 10.0);
    }

    #[test]
    fn test_explicit_newlines() {
        let m = measurer();
        let size = m.measure("a\nb\nc", &font(), f32::MAX);
        assert_eq!(size.height, 3.0 * m.line_height(&font()));
    }

    #[test]
    fn test_long_word_breaks_at_char_level() {
        let m = measurer();
        let budget = 40.0; // fits 5 chars of 8px
        let size = m.measure("aaaaaaaaaa", &font(), budget);
        assert_eq!(size.height, 2.0 * m.line_height(&font()));
        assert!(size.width <= budget);
    }

    #[test]
    fn test_whole_pixel_results() {
        let m = measurer();
        let size = m.measure("some message text", &font(), 100.0);
        assert_eq!(size.width.fract(), 0.0);
        assert_eq!(size.height % m.line_height(&font()), 0.0);
    }

    #[test]
    fn test_measure_is_idempotent() {
        let m = measurer();
        let a = m.measure("The file could not be saved.", &font(), 200.0);
        let b = m.measure("The file could not be saved.", &font(), 200.0);
        assert_eq!(a, b);
    }
}

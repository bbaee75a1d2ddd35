//! Separator-aware text splitting with overlap

use crate::config::{ChunkConfig, KeepSeparator, OversizePolicy};
use std::collections::VecDeque;

/// A piece of the input between separators
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Segment<'a> {
    /// Segment text
    text: &'a str,
    /// Text placed before this segment when it follows another one in the
    /// same chunk
    joiner: &'a str,
}

/// A segment sitting in the merge window, with its measurements cached
#[derive(Debug)]
struct WindowEntry<'a> {
    segment: Segment<'a>,
    len: usize,
    joiner_len: usize,
}

/// Splits text on a separator and merges the pieces into overlapping chunks
///
/// Segments are accumulated greedily until the next one would push the
/// chunk past `chunk_size`. The chunk is then emitted and segments are
/// dropped from its front until at most `chunk_overlap` units remain; those
/// trailing segments open the next chunk.
///
/// ```
/// use pagechunk_core::{CharacterSplitter, ChunkConfig};
///
/// let config = ChunkConfig::new("", 4, 2).unwrap();
/// let chunks = CharacterSplitter::new(config).split_text("abcdefghij");
/// assert_eq!(chunks, ["abcd", "cdef", "efgh", "ghij"]);
/// ```
#[derive(Debug, Clone)]
pub struct CharacterSplitter {
    config: ChunkConfig,
}

impl CharacterSplitter {
    /// Create a new splitter
    pub fn new(config: ChunkConfig) -> Self {
        Self { config }
    }

    /// Get the configuration
    pub fn config(&self) -> &ChunkConfig {
        &self.config
    }

    /// Split text into chunks, in reading order
    pub fn split_text(&self, text: &str) -> Vec<String> {
        if text.is_empty() {
            return Vec::new();
        }

        let mut segments = self.segments(text);
        if self.config.oversize == OversizePolicy::HardSplit {
            segments = self.hard_split(segments);
        }

        let chunks = self.merge(&segments);
        log::debug!(
            "split {} bytes into {} segments and {} chunks",
            text.len(),
            segments.len(),
            chunks.len()
        );
        chunks
    }

    /// Break text into non-empty segments on the separator
    fn segments<'a>(&'a self, text: &'a str) -> Vec<Segment<'a>> {
        if self.config.separator.is_empty() {
            return text
                .char_indices()
                .map(|(i, c)| Segment {
                    text: &text[i..i + c.len_utf8()],
                    joiner: "",
                })
                .collect();
        }

        let matches: Vec<(usize, usize)> = match &self.config.pattern {
            Some(regex) => regex
                .find_iter(text)
                .map(|m| (m.start(), m.end()))
                .collect(),
            None => text
                .match_indices(self.config.separator.as_str())
                .map(|(start, sep)| (start, start + sep.len()))
                .collect(),
        };

        let mut segments = Vec::with_capacity(matches.len() + 1);
        let mut cursor = 0;

        match self.config.keep_separator {
            KeepSeparator::None => {
                let mut joiner = "";
                for (start, end) in matches {
                    segments.push(Segment {
                        text: &text[cursor..start],
                        joiner,
                    });
                    joiner = &text[start..end];
                    cursor = end;
                }
                segments.push(Segment {
                    text: &text[cursor..],
                    joiner,
                });
            }
            KeepSeparator::Start => {
                for (start, _) in matches {
                    segments.push(Segment {
                        text: &text[cursor..start],
                        joiner: "",
                    });
                    cursor = start;
                }
                segments.push(Segment {
                    text: &text[cursor..],
                    joiner: "",
                });
            }
            KeepSeparator::End => {
                for (_, end) in matches {
                    segments.push(Segment {
                        text: &text[cursor..end],
                        joiner: "",
                    });
                    cursor = end;
                }
                segments.push(Segment {
                    text: &text[cursor..],
                    joiner: "",
                });
            }
        }

        segments.retain(|segment| !segment.text.is_empty());
        segments
    }

    /// Replace every oversized segment with overlapping pieces that fit
    fn hard_split<'a>(&self, segments: Vec<Segment<'a>>) -> Vec<Segment<'a>> {
        let size = self.config.chunk_size;
        let overlap = self.config.chunk_overlap;
        let mut out = Vec::with_capacity(segments.len());

        for segment in segments {
            if self.config.measure(segment.text) <= size {
                out.push(segment);
                continue;
            }

            let text = segment.text;
            // Every char boundary after the first character, ending at len
            let ends: Vec<usize> = text
                .char_indices()
                .skip(1)
                .map(|(i, _)| i)
                .chain(std::iter::once(text.len()))
                .collect();

            let mut start = 0;
            let mut joiner = segment.joiner;
            loop {
                let candidates = &ends[ends.partition_point(|&e| e <= start)..];
                let fits = |e: usize| self.config.measure(&text[start..e]) <= size;

                // Gallop to bound the search, then bisect
                let mut probe = 1;
                while probe < candidates.len() && fits(candidates[probe]) {
                    probe *= 2;
                }
                let bound = (probe + 1).min(candidates.len());
                let fitting = candidates[..bound].partition_point(|&e| fits(e));
                // A single character that does not fit is still taken whole
                let end = candidates[fitting.max(1) - 1];

                out.push(Segment {
                    text: &text[start..end],
                    joiner,
                });
                joiner = "";

                if end == text.len() {
                    break;
                }

                let starts = &candidates[..candidates.partition_point(|&s| s <= end)];
                let skip = starts
                    .partition_point(|&s| self.config.measure(&text[s..end]) > overlap);
                start = starts.get(skip).copied().unwrap_or(end);
            }
        }

        out
    }

    /// Greedily merge segments into chunks carrying overlap forward
    fn merge(&self, segments: &[Segment<'_>]) -> Vec<String> {
        let size = self.config.chunk_size;
        let overlap = self.config.chunk_overlap;

        let mut chunks = Vec::new();
        let mut window: VecDeque<WindowEntry<'_>> = VecDeque::new();
        let mut total = 0usize;

        for &segment in segments {
            let len = self.config.measure(segment.text);
            let joiner_len = self.config.measure(segment.joiner);
            let join_cost = |window_empty: bool| if window_empty { 0 } else { joiner_len };

            if total + len + join_cost(window.is_empty()) > size {
                if total > size {
                    log::warn!(
                        "created a chunk of size {total}, which is longer than the specified {size}"
                    );
                }

                if !window.is_empty() {
                    if let Some(chunk) = self.join(&window) {
                        chunks.push(chunk);
                    }

                    while total > overlap
                        || (total + len + join_cost(window.is_empty()) > size && total > 0)
                    {
                        let Some(front) = window.pop_front() else {
                            break;
                        };
                        total -= front.len;
                        if let Some(next) = window.front() {
                            total -= next.joiner_len;
                        }
                    }
                }
            }

            total += len + join_cost(window.is_empty());
            window.push_back(WindowEntry {
                segment,
                len,
                joiner_len,
            });
        }

        if total > size {
            log::warn!(
                "created a chunk of size {total}, which is longer than the specified {size}"
            );
        }
        if let Some(chunk) = self.join(&window) {
            chunks.push(chunk);
        }

        chunks
    }

    /// Join the window into a chunk, or `None` if it is blank
    fn join(&self, window: &VecDeque<WindowEntry<'_>>) -> Option<String> {
        let mut text = String::new();
        for (i, entry) in window.iter().enumerate() {
            if i > 0 {
                text.push_str(entry.segment.joiner);
            }
            text.push_str(entry.segment.text);
        }

        let text = if self.config.strip_whitespace {
            text.trim().to_string()
        } else {
            text
        };

        (!text.is_empty()).then_some(text)
    }
}

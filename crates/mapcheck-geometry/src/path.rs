//! # SVG Path Parsing
//!
//! Map documents describe shapes with a restricted SVG path grammar: the
//! absolute commands `M`, `L`, `Q`, `C` and `Z`. A command runs from its
//! letter up to the next command letter; its operands are numbers separated
//! by whitespace or commas and are consumed two at a time as points.
//!
//! [`parse_svg_path`] is lenient. It drops any coordinate pair containing a
//! token that is not a finite number, ignores text before the first command,
//! and never fails; an unusable path simply yields no segments.
//! [`parse_svg_path_strict`] accepts the same grammar but reports every
//! operand the lenient parser would have skipped.

use mapcheck_core::Point;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A path command letter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PathCommand {
    /// `M`: start a new subpath.
    MoveTo,
    /// `L`: straight line.
    LineTo,
    /// `Q`: quadratic Bézier (control, end).
    Quadratic,
    /// `C`: cubic Bézier (control, control, end).
    Cubic,
    /// `Z`: close the current subpath.
    ClosePath,
}

impl PathCommand {
    /// Decode a command letter. Only absolute commands are recognised.
    pub fn from_letter(c: char) -> Option<Self> {
        match c {
            'M' => Some(Self::MoveTo),
            'L' => Some(Self::LineTo),
            'Q' => Some(Self::Quadratic),
            'C' => Some(Self::Cubic),
            'Z' => Some(Self::ClosePath),
            _ => None,
        }
    }

    pub fn letter(&self) -> char {
        match self {
            Self::MoveTo => 'M',
            Self::LineTo => 'L',
            Self::Quadratic => 'Q',
            Self::Cubic => 'C',
            Self::ClosePath => 'Z',
        }
    }

    /// Points consumed by one application of the command.
    pub fn arity(&self) -> usize {
        match self {
            Self::MoveTo | Self::LineTo => 1,
            Self::Quadratic => 2,
            Self::Cubic => 3,
            Self::ClosePath => 0,
        }
    }
}

impl std::fmt::Display for PathCommand {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.letter())
    }
}

/// One command with the points that followed it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PathSegment {
    pub command: PathCommand,
    pub points: Vec<Point>,
}

/// A strict-parse failure.
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum PathError {
    /// Non-whitespace text precedes the first command letter.
    #[error("unexpected text before first command: {0:?}")]
    LeadingText(String),

    /// The path does not begin with a move-to.
    #[error("path must start with M, found {0}")]
    MissingMoveTo(char),

    /// An operand is not a finite number.
    #[error("command {command} #{index}: {token:?} is not a number")]
    InvalidNumber {
        command: char,
        /// Zero-based position of the command within the path.
        index: usize,
        token: String,
    },

    /// An odd number of operands leaves an x without its y.
    #[error("command {command} #{index}: {count} operands cannot form coordinate pairs")]
    DanglingCoordinate { command: char, index: usize, count: usize },

    /// The number of points does not match the command.
    #[error("command {command} #{index}: expected {expected} point(s) per group, found {found}")]
    ArityMismatch {
        command: char,
        index: usize,
        expected: usize,
        found: usize,
    },

    /// `Z` carries operands.
    #[error("command Z #{index} takes no operands")]
    UnexpectedOperands { index: usize },
}

/// Split `d` into `(command, operand text)` pairs, plus whatever text came
/// before the first command.
fn split_commands(d: &str) -> (&str, Vec<(PathCommand, &str)>) {
    let mut commands = Vec::new();
    let mut leading = d;
    let mut current: Option<(PathCommand, usize)> = None;

    for (pos, c) in d.char_indices() {
        let Some(command) = PathCommand::from_letter(c) else {
            continue;
        };
        match current {
            Some((prev, start)) => commands.push((prev, &d[start..pos])),
            None => leading = &d[..pos],
        }
        current = Some((command, pos + c.len_utf8()));
    }

    if let Some((prev, start)) = current {
        commands.push((prev, &d[start..]));
    }

    (leading, commands)
}

fn operand_tokens(text: &str) -> impl Iterator<Item = &str> {
    text.split(|c: char| c.is_whitespace() || c == ',')
        .filter(|t| !t.is_empty())
}

fn parse_number(token: &str) -> Option<f64> {
    token.parse::<f64>().ok().filter(|v| v.is_finite())
}

/// Parse `d` leniently. Never fails.
pub fn parse_svg_path(d: &str) -> Vec<PathSegment> {
    let (_, commands) = split_commands(d);

    commands
        .into_iter()
        .map(|(command, text)| {
            let points = if command == PathCommand::ClosePath {
                Vec::new()
            } else {
                let tokens: Vec<&str> = operand_tokens(text).collect();
                tokens
                    .chunks(2)
                    .filter_map(|pair| match pair {
                        [x, y] => Some(Point::new(parse_number(x)?, parse_number(y)?)),
                        _ => None,
                    })
                    .collect()
            };
            PathSegment { command, points }
        })
        .collect()
}

/// Parse `d`, rejecting anything the lenient parser would drop.
///
/// An empty or whitespace-only path parses to no segments.
///
/// # Errors
///
/// Returns the first [`PathError`] encountered, scanning left to right.
pub fn parse_svg_path_strict(d: &str) -> Result<Vec<PathSegment>, PathError> {
    let (leading, commands) = split_commands(d);

    if !leading.trim().is_empty() {
        return Err(PathError::LeadingText(leading.trim().to_string()));
    }
    if let Some((first, _)) = commands.first() {
        if *first != PathCommand::MoveTo {
            return Err(PathError::MissingMoveTo(first.letter()));
        }
    }

    let mut segments = Vec::with_capacity(commands.len());
    for (index, (command, text)) in commands.into_iter().enumerate() {
        let tokens: Vec<&str> = operand_tokens(text).collect();

        if command == PathCommand::ClosePath {
            if !tokens.is_empty() {
                return Err(PathError::UnexpectedOperands { index });
            }
            segments.push(PathSegment { command, points: Vec::new() });
            continue;
        }

        let mut values = Vec::with_capacity(tokens.len());
        for token in &tokens {
            let value = parse_number(token).ok_or_else(|| PathError::InvalidNumber {
                command: command.letter(),
                index,
                token: (*token).to_string(),
            })?;
            values.push(value);
        }

        if values.len() % 2 != 0 {
            return Err(PathError::DanglingCoordinate {
                command: command.letter(),
                index,
                count: values.len(),
            });
        }

        let points: Vec<Point> = values.chunks(2).map(|p| Point::new(p[0], p[1])).collect();
        if points.is_empty() || points.len() % command.arity() != 0 {
            return Err(PathError::ArityMismatch {
                command: command.letter(),
                index,
                expected: command.arity(),
                found: points.len(),
            });
        }

        segments.push(PathSegment { command, points });
    }

    Ok(segments)
}

/// Every point of every non-`Z` segment, in path order.
pub fn path_points(d: &str) -> Vec<Point> {
    parse_svg_path(d)
        .into_iter()
        .filter(|s| s.command != PathCommand::ClosePath)
        .flat_map(|s| s.points)
        .collect()
}

/// The outline of `d` as a polyline.
///
/// Curve control points are kept as ordinary vertices. Each `Z` re-appends
/// the first point of its subpath so the closing edge is part of the outline.
pub fn path_perimeter(d: &str) -> Vec<Point> {
    let mut outline = Vec::new();
    let mut subpath_start: Option<Point> = None;

    for segment in parse_svg_path(d) {
        match segment.command {
            PathCommand::ClosePath => {
                if let Some(start) = subpath_start.take() {
                    outline.push(start);
                }
            }
            PathCommand::MoveTo => {
                subpath_start = segment.points.first().copied();
                outline.extend(segment.points);
            }
            _ => {
                if subpath_start.is_none() {
                    subpath_start = segment.points.first().copied();
                }
                outline.extend(segment.points);
            }
        }
    }

    outline
}

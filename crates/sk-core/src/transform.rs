//! 2D affine transforms and their string-encoded attribute form.
//!
//! A transform is the 2×3 matrix `[[a, b, tx], [c, d, ty]]` mapping
//! `x' = a·x + b·y + tx`, `y' = c·x + d·y + ty`. Host documents store it as
//! a string attribute in SVG argument order (`matrix(a, c, b, d, tx, ty)`,
//! column-major); an absent attribute means identity.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use winnow::combinator::{alt, delimited, opt, preceded};
use winnow::error::{ContextError, ErrMode};
use winnow::prelude::*;
use winnow::token::take_while;

/// A 2D affine transform.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transform {
    pub a: f32,
    pub b: f32,
    pub tx: f32,
    pub c: f32,
    pub d: f32,
    pub ty: f32,
}

impl Transform {
    pub const IDENTITY: Self = Self {
        a: 1.0,
        b: 0.0,
        tx: 0.0,
        c: 0.0,
        d: 1.0,
        ty: 0.0,
    };

    /// A pure translation by `(dx, dy)`.
    pub const fn translation(dx: f32, dy: f32) -> Self {
        Self {
            a: 1.0,
            b: 0.0,
            tx: dx,
            c: 0.0,
            d: 1.0,
            ty: dy,
        }
    }

    /// True when the linear part is identity (only `tx`/`ty` may be set).
    pub fn is_translation(&self) -> bool {
        self.a == 1.0 && self.b == 0.0 && self.c == 0.0 && self.d == 1.0
    }

    /// This transform with an extra translation added onto its translation
    /// component. Rotation/scale parts are untouched.
    pub fn translated(mut self, dx: f32, dy: f32) -> Self {
        self.tx += dx;
        self.ty += dy;
        self
    }

    /// Parse the string-encoded attribute form: `matrix(a,c,b,d,tx,ty)` in
    /// SVG argument order, `translate(tx[, ty])`, or `scale(s[, sy])`.
    ///
    /// # Errors
    /// Returns a message when the input is not one of the supported forms.
    pub fn parse(input: &str) -> Result<Self, String> {
        let mut rest = input.trim();
        let t = transform_fn
            .parse_next(&mut rest)
            .map_err(|e| format!("Transform parse error in {input:?}: {e}"))?;
        if !rest.trim().is_empty() {
            return Err(format!("Trailing input after transform: {rest:?}"));
        }
        Ok(t)
    }

    /// Emit as the shortest valid attribute string: `translate(…)` for pure
    /// translations, `matrix(…)` otherwise.
    pub fn to_attr(&self) -> String {
        if self.is_translation() {
            format!("translate({},{})", self.tx, self.ty)
        } else {
            format!(
                "matrix({},{},{},{},{},{})",
                self.a, self.c, self.b, self.d, self.tx, self.ty
            )
        }
    }
}

impl Default for Transform {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl Serialize for Transform {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_attr())
    }
}

impl<'de> Deserialize<'de> for Transform {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Transform::parse(&s).map_err(serde::de::Error::custom)
    }
}

// ─── Attribute parser ─────────────────────────────────────────────────────

fn transform_fn(input: &mut &str) -> ModalResult<Transform> {
    alt((matrix_form, translate_form, scale_form)).parse_next(input)
}

fn matrix_form(input: &mut &str) -> ModalResult<Transform> {
    let args = preceded("matrix", arg_list).parse_next(input)?;
    if args.len() != 6 {
        return Err(ErrMode::Backtrack(ContextError::new()));
    }
    // SVG argument order is column-major: (a, c, b, d, tx, ty) in row terms.
    Ok(Transform {
        a: args[0],
        c: args[1],
        b: args[2],
        d: args[3],
        tx: args[4],
        ty: args[5],
    })
}

fn translate_form(input: &mut &str) -> ModalResult<Transform> {
    let args = preceded("translate", arg_list).parse_next(input)?;
    match args[..] {
        [dx] => Ok(Transform::translation(dx, 0.0)),
        [dx, dy] => Ok(Transform::translation(dx, dy)),
        _ => Err(ErrMode::Backtrack(ContextError::new())),
    }
}

fn scale_form(input: &mut &str) -> ModalResult<Transform> {
    let args = preceded("scale", arg_list).parse_next(input)?;
    let (sx, sy) = match args[..] {
        [s] => (s, s),
        [sx, sy] => (sx, sy),
        _ => return Err(ErrMode::Backtrack(ContextError::new())),
    };
    Ok(Transform {
        a: sx,
        b: 0.0,
        tx: 0.0,
        c: 0.0,
        d: sy,
        ty: 0.0,
    })
}

/// `( n [, n]* )` with commas and/or whitespace between arguments.
fn arg_list(input: &mut &str) -> ModalResult<Vec<f32>> {
    skip_space(input);
    delimited('(', number_seq, (skip_space_p, ')')).parse_next(input)
}

fn number_seq(input: &mut &str) -> ModalResult<Vec<f32>> {
    let mut numbers = Vec::new();
    skip_space(input);
    numbers.push(parse_number.parse_next(input)?);
    loop {
        let checkpoint = *input;
        skip_space(input);
        let _ = opt(',').parse_next(input)?;
        skip_space(input);
        match parse_number.parse_next(input) {
            Ok(n) => numbers.push(n),
            Err(_) => {
                *input = checkpoint;
                break;
            }
        }
    }
    Ok(numbers)
}

fn parse_number(input: &mut &str) -> ModalResult<f32> {
    let start = *input;
    if input.starts_with('-') || input.starts_with('+') {
        *input = &input[1..];
    }
    let _ = take_while(1.., |c: char| c.is_ascii_digit()).parse_next(input)?;
    if input.starts_with('.') {
        *input = &input[1..];
        let _ =
            take_while::<_, _, ContextError>(0.., |c: char| c.is_ascii_digit()).parse_next(input);
    }
    let matched = &start[..start.len() - input.len()];
    matched
        .parse::<f32>()
        .map_err(|_| ErrMode::Backtrack(ContextError::new()))
}

fn skip_space(input: &mut &str) {
    *input = input.trim_start();
}

fn skip_space_p(input: &mut &str) -> ModalResult<()> {
    skip_space(input);
    Ok(())
}

// ─── Tests ────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_matrix_maps_svg_argument_order() {
        let t = Transform::parse("matrix(1,0,0,1,30,0)").unwrap();
        assert_eq!(t, Transform::translation(30.0, 0.0));

        // Non-trivial linear part: a=2, c=0.5, b=-0.5, d=3
        let t = Transform::parse("matrix(2, 0.5, -0.5, 3, 10, 20)").unwrap();
        assert_eq!(t.a, 2.0);
        assert_eq!(t.b, -0.5);
        assert_eq!(t.c, 0.5);
        assert_eq!(t.d, 3.0);
        assert_eq!(t.tx, 10.0);
        assert_eq!(t.ty, 20.0);
    }

    #[test]
    fn parse_translate_forms() {
        assert_eq!(
            Transform::parse("translate(30)").unwrap(),
            Transform::translation(30.0, 0.0)
        );
        assert_eq!(
            Transform::parse("translate(0,-30)").unwrap(),
            Transform::translation(0.0, -30.0)
        );
        assert_eq!(
            Transform::parse("translate(10 20)").unwrap(),
            Transform::translation(10.0, 20.0)
        );
    }

    #[test]
    fn parse_scale_forms() {
        let t = Transform::parse("scale(2)").unwrap();
        assert_eq!((t.a, t.d), (2.0, 2.0));
        assert!(!t.is_translation());

        let t = Transform::parse("scale(2, 3)").unwrap();
        assert_eq!((t.a, t.d), (2.0, 3.0));
    }

    #[test]
    fn parse_rejects_malformed_input() {
        assert!(Transform::parse("rotate(45)").is_err());
        assert!(Transform::parse("matrix(1,0,0,1)").is_err());
        assert!(Transform::parse("translate(1,2) extra").is_err());
        assert!(Transform::parse("").is_err());
    }

    #[test]
    fn attr_emission_roundtrips() {
        let t = Transform::translation(30.0, 0.0);
        assert_eq!(t.to_attr(), "translate(30,0)");
        assert_eq!(Transform::parse(&t.to_attr()).unwrap(), t);

        let t = Transform {
            a: 2.0,
            b: 0.0,
            tx: 5.0,
            c: 0.0,
            d: 2.0,
            ty: -7.5,
        };
        assert_eq!(t.to_attr(), "matrix(2,0,0,2,5,-7.5)");
        assert_eq!(Transform::parse(&t.to_attr()).unwrap(), t);
    }

    #[test]
    fn translated_preserves_linear_part() {
        let t = Transform {
            a: 0.0,
            b: -1.0,
            tx: 4.0,
            c: 1.0,
            d: 0.0,
            ty: 9.0,
        };
        let moved = t.translated(30.0, 0.0);
        assert_eq!(moved.tx, 34.0);
        assert_eq!(moved.ty, 9.0);
        assert_eq!((moved.a, moved.b, moved.c, moved.d), (t.a, t.b, t.c, t.d));
    }

    #[test]
    fn serde_uses_attribute_encoding() {
        let t = Transform::translation(0.0, -30.0);
        let json = serde_json::to_string(&t).unwrap();
        assert_eq!(json, "\"translate(0,-30)\"");
        let back: Transform = serde_json::from_str(&json).unwrap();
        assert_eq!(back, t);
    }
}

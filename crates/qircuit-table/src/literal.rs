//! Matrix literal parser.
//!
//! Accepts the row-major text form used in gate-definition tables: rows are
//! separated by `;`, entries by commas and/or whitespace, and brackets are
//! ignored. Entries are real or complex numbers (`1`, `-0.5`, `1j`,
//! `0.5-0.5j`).

use qircuit_ir::{Complex64, IrError, Matrix};

use crate::error::{TableError, TableResult};
use crate::lexer::{Token, tokenize};

/// Parse the matrix literal defining `gate`.
pub fn parse_matrix(gate: &str, literal: &str) -> TableResult<Matrix> {
    let invalid = |message: String| TableError::InvalidMatrix {
        gate: gate.to_string(),
        literal: literal.to_string(),
        message,
    };

    let tokens = tokenize(literal).map_err(invalid)?;
    let rows = parse_rows(&tokens).map_err(invalid)?;

    Matrix::from_rows(rows).map_err(|e| match e {
        IrError::NonSquareMatrix(msg) => invalid(msg),
        other => invalid(other.to_string()),
    })
}

fn parse_rows(tokens: &[Token]) -> Result<Vec<Vec<Complex64>>, String> {
    let mut rows = Vec::new();
    let mut row = Vec::new();
    let mut pos = 0;

    while pos < tokens.len() {
        match &tokens[pos] {
            Token::Space | Token::Comma | Token::LBracket | Token::RBracket => pos += 1,
            Token::Semicolon => {
                rows.push(std::mem::take(&mut row));
                pos += 1;
            }
            _ => {
                let (value, next) = parse_entry(tokens, pos)?;
                row.push(value);
                pos = next;
            }
        }
    }
    if !row.is_empty() || !rows.is_empty() {
        rows.push(row);
    }

    if rows.is_empty() {
        return Err("empty matrix".into());
    }
    if let Some(i) = rows.iter().position(Vec::is_empty) {
        return Err(format!("row {i} is empty"));
    }
    Ok(rows)
}

/// Parse `[sign] number [(+|-) imaginary]` starting at `pos`.
fn parse_entry(tokens: &[Token], mut pos: usize) -> Result<(Complex64, usize), String> {
    let (sign, after_sign) = sign_at(tokens, pos);
    pos = after_sign;

    let first = match tokens.get(pos) {
        Some(Token::Real(v)) => Complex64::new(sign * v, 0.0),
        Some(Token::Imaginary(v)) => return Ok((Complex64::new(0.0, sign * v), pos + 1)),
        Some(other) => return Err(format!("expected a number, found '{other}'")),
        None => return Err("expected a number, found end of input".into()),
    };
    pos += 1;

    if matches!(tokens.get(pos), Some(Token::Plus | Token::Minus)) {
        let (sign, after_sign) = sign_at(tokens, pos);
        return match tokens.get(after_sign) {
            Some(Token::Imaginary(v)) => Ok((first + Complex64::new(0.0, sign * v), after_sign + 1)),
            Some(other) => Err(format!("expected an imaginary part, found '{other}'")),
            None => Err("expected an imaginary part, found end of input".into()),
        };
    }

    Ok((first, pos))
}

fn sign_at(tokens: &[Token], pos: usize) -> (f64, usize) {
    match tokens.get(pos) {
        Some(Token::Minus) => (-1.0, pos + 1),
        Some(Token::Plus) => (1.0, pos + 1),
        _ => (1.0, pos),
    }
}

// This file is part of Nitrogen.
//
// Nitrogen is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// Nitrogen is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License
// along with Nitrogen.  If not, see <http://www.gnu.org/licenses/>.
use crate::{conversion::base_unit_conversion, Descriptor, Factor, Rational, UnitError, UnitExpr};

/// When two factors of an expression may be combined into one.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Strategy {
    /// Only identical descriptors combine: `m * m = m^2`, but `m * mm` stays mixed.
    SameBase,
    /// Base units of one dimension combine after converting into the first one
    /// seen, accumulating the conversion factor.
    SameDimension,
}

impl Strategy {
    pub const fn combines(self, rep: &Factor, other: &Factor) -> bool {
        match self {
            Self::SameBase => rep.same_base(other),
            Self::SameDimension => rep.same_base(other) || rep.same_dimension(other),
        }
    }
}

/// An expression together with the scalar picked up while building it.
#[derive(Clone, Copy, Debug)]
pub struct Merged {
    expr: UnitExpr,
    factor: f64,
}

impl Merged {
    pub const fn new(expr: UnitExpr) -> Self {
        Self { expr, factor: 1.0 }
    }

    pub const fn expr(&self) -> UnitExpr {
        self.expr
    }

    pub const fn factor(&self) -> f64 {
        self.factor
    }
}

/// Add one factor into `acc`.
pub const fn absorb(acc: Merged, f: Factor, strategy: Strategy) -> Result<Merged, UnitError> {
    if f.exponent().is_zero() {
        return Ok(acc);
    }
    let mut i = 0;
    while i < acc.expr.len() {
        let rep = acc.expr.get(i);
        if strategy.combines(&rep, &f) {
            let mut factor = acc.factor;
            if !rep.same_base(&f) {
                let target = Factor::new(rep.descriptor(), f.exponent());
                match base_unit_conversion(f, target) {
                    Ok(k) => factor *= k,
                    Err(e) => return Err(e),
                }
            }
            let exponent = rep.exponent().add(f.exponent());
            let expr = if exponent.is_zero() {
                acc.expr.remove(i)
            } else {
                acc.expr.replace(i, rep.with_exponent(exponent))
            };
            return Ok(Merged { expr, factor });
        }
        i += 1;
    }
    match acc.expr.push(f) {
        Ok(expr) => Ok(Merged {
            expr,
            factor: acc.factor,
        }),
        Err(e) => Err(e),
    }
}

pub const fn fold(
    acc: Merged,
    factors: &[Factor],
    strategy: Strategy,
) -> Result<Merged, UnitError> {
    let mut acc = acc;
    let mut i = 0;
    while i < factors.len() {
        acc = match absorb(acc, factors[i], strategy) {
            Ok(acc) => acc,
            Err(e) => return Err(e),
        };
        i += 1;
    }
    Ok(acc)
}

pub const fn multiply(a: UnitExpr, b: UnitExpr) -> Result<UnitExpr, UnitError> {
    if b.is_dimensionless() {
        return Ok(a);
    }
    if a.is_dimensionless() {
        return Ok(b);
    }
    match fold(Merged::new(a), b.factors(), Strategy::SameBase) {
        Ok(m) => Ok(m.expr),
        Err(e) => Err(e),
    }
}

pub const fn divide(a: UnitExpr, b: UnitExpr) -> Result<UnitExpr, UnitError> {
    multiply(a, inverse(b))
}

pub const fn inverse(a: UnitExpr) -> UnitExpr {
    pow(a, Rational::NEG_ONE)
}

/// Raise every exponent by `r`. Zero collapses to dimensionless.
pub const fn pow(a: UnitExpr, r: Rational) -> UnitExpr {
    if r.is_zero() {
        return UnitExpr::DIMENSIONLESS;
    }
    let mut out = a;
    let mut i = 0;
    while i < a.len() {
        let f = a.get(i);
        out = out.replace(i, f.with_exponent(f.exponent().mul(r)));
        i += 1;
    }
    out
}

const fn expand(acc: Merged, f: Factor) -> Result<Merged, UnitError> {
    match f.descriptor() {
        Descriptor::Base(_) => absorb(acc, f, Strategy::SameBase),
        Descriptor::Derived(d) => {
            let definition = d.definition();
            let mut acc = acc;
            let mut i = 0;
            while i < definition.len() {
                let g = definition[i];
                acc = match expand(acc, g.with_exponent(g.exponent().mul(f.exponent()))) {
                    Ok(acc) => acc,
                    Err(e) => return Err(e),
                };
                i += 1;
            }
            Ok(acc)
        }
    }
}

/// Rewrite `a` in base units only. Derived units expand recursively; repeated
/// bases merge. No conversion happens, so `m mm` stays as it is.
pub const fn flatten(a: UnitExpr) -> Result<UnitExpr, UnitError> {
    let mut acc = Merged::new(UnitExpr::DIMENSIONLESS);
    let mut i = 0;
    while i < a.len() {
        acc = match expand(acc, a.get(i)) {
            Ok(acc) => acc,
            Err(e) => return Err(e),
        };
        i += 1;
    }
    Ok(acc.expr)
}

impl Factor {
    pub const fn flat(&self) -> Result<UnitExpr, UnitError> {
        match expand(Merged::new(UnitExpr::DIMENSIONLESS), *self) {
            Ok(m) => Ok(m.expr),
            Err(e) => Err(e),
        }
    }
}

impl UnitExpr {
    pub const fn multiply(self, other: UnitExpr) -> Result<UnitExpr, UnitError> {
        multiply(self, other)
    }

    pub const fn divide(self, other: UnitExpr) -> Result<UnitExpr, UnitError> {
        divide(self, other)
    }

    pub const fn inverse(self) -> UnitExpr {
        inverse(self)
    }

    pub const fn pow(self, r: Rational) -> UnitExpr {
        pow(self, r)
    }

    pub const fn flatten(self) -> Result<UnitExpr, UnitError> {
        flatten(self)
    }
}

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

//! Limits that bound every compile-time evaluation in the engine.

/// Largest number of distinct factors a single unit expression can hold.
pub const MAX_FACTORS: usize = 16;

/// Longest parent chain walked before a hierarchy is declared broken.
pub const MAX_HIERARCHY_DEPTH: usize = 64;

/// Cap on the Newton iterations used for fractional powers.
pub const MAX_NEWTON_ITERATIONS: usize = 1_000;

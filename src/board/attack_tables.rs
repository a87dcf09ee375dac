//! Precomputed attack tables for mobility and king-zone computation.

use once_cell::sync::Lazy;

pub(crate) static KNIGHT_ATTACKS: Lazy<[u64; 64]> = Lazy::new(|| {
    leaper_attacks(&[
        (2, 1),
        (1, 2),
        (-1, 2),
        (-2, 1),
        (-2, -1),
        (-1, -2),
        (1, -2),
        (2, -1),
    ])
});

pub(crate) static KING_ATTACKS: Lazy<[u64; 64]> = Lazy::new(|| {
    leaper_attacks(&[
        (1, 0),
        (-1, 0),
        (0, 1),
        (0, -1),
        (1, 1),
        (1, -1),
        (-1, 1),
        (-1, -1),
    ])
});

fn leaper_attacks(deltas: &[(isize, isize)]) -> [u64; 64] {
    let mut attacks = [0u64; 64];
    for (sq, mask) in attacks.iter_mut().enumerate() {
        let r = (sq / 8) as isize;
        let f = (sq % 8) as isize;
        for &(dr, df) in deltas {
            let nr = r + dr;
            let nf = f + df;
            if (0..8).contains(&nr) && (0..8).contains(&nf) {
                *mask |= 1u64 << ((nr as usize) * 8 + (nf as usize));
            }
        }
    }
    attacks
}

const DIR_N: usize = 0;
const DIR_S: usize = 1;
const DIR_E: usize = 2;
const DIR_W: usize = 3;
const DIR_NE: usize = 4;
const DIR_NW: usize = 5;
const DIR_SE: usize = 6;
const DIR_SW: usize = 7;

static RAYS: Lazy<[[u64; 64]; 8]> = Lazy::new(|| {
    let mut rays = [[0u64; 64]; 8];
    let dirs = [
        (1, 0),   // N
        (-1, 0),  // S
        (0, 1),   // E
        (0, -1),  // W
        (1, 1),   // NE
        (1, -1),  // NW
        (-1, 1),  // SE
        (-1, -1), // SW
    ];
    for sq in 0..64 {
        let r = (sq / 8) as isize;
        let f = (sq % 8) as isize;
        for (d, (dr, df)) in dirs.iter().enumerate() {
            let mut mask = 0u64;
            let mut nr = r + dr;
            let mut nf = f + df;
            while (0..8).contains(&nr) && (0..8).contains(&nf) {
                mask |= 1u64 << ((nr as usize) * 8 + (nf as usize));
                nr += dr;
                nf += df;
            }
            rays[d][sq] = mask;
        }
    }
    rays
});

fn is_increasing_dir(dir: usize) -> bool {
    matches!(dir, DIR_N | DIR_E | DIR_NE | DIR_NW)
}

fn ray_attacks(from_idx: usize, dir: usize, occupancy: u64) -> u64 {
    let ray = RAYS[dir][from_idx];
    let blockers = ray & occupancy;
    if blockers == 0 {
        return ray;
    }
    let blocker_idx = if is_increasing_dir(dir) {
        blockers.trailing_zeros() as usize
    } else {
        63 - blockers.leading_zeros() as usize
    };
    ray ^ RAYS[dir][blocker_idx]
}

/// Attack set of a sliding piece from `from_idx` given board occupancy.
///
/// `bishop` selects the diagonal ray set; rooks use the orthogonal set, and
/// queens are the union of both calls.
pub(crate) fn slider_attacks(from_idx: usize, occupancy: u64, bishop: bool) -> u64 {
    let dirs: &[usize] = if bishop {
        &[DIR_NE, DIR_NW, DIR_SE, DIR_SW]
    } else {
        &[DIR_N, DIR_S, DIR_E, DIR_W]
    };

    let mut attacks = 0u64;
    for &dir in dirs {
        attacks |= ray_attacks(from_idx, dir, occupancy);
    }
    attacks
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_knight_attacks_corner_and_center() {
        // a1 knight reaches b3 and c2
        assert_eq!(KNIGHT_ATTACKS[0].count_ones(), 2);
        // d4 knight reaches 8 squares
        assert_eq!(KNIGHT_ATTACKS[27].count_ones(), 8);
    }

    #[test]
    fn test_king_attacks() {
        assert_eq!(KING_ATTACKS[0].count_ones(), 3);
        assert_eq!(KING_ATTACKS[27].count_ones(), 8);
    }

    #[test]
    fn test_rook_attacks_empty_board() {
        // d4, empty board: 14 squares
        assert_eq!(slider_attacks(27, 0, false).count_ones(), 14);
    }

    #[test]
    fn test_rook_attacks_blocked() {
        // d4 rook with a blocker on d6: ray stops at the blocker
        let occ = 1u64 << 43; // d6
        let attacks = slider_attacks(27, occ, false);
        assert!(attacks & (1 << 43) != 0, "blocker square is attacked");
        assert!(attacks & (1 << 51) == 0, "squares behind blocker are not");
    }

    #[test]
    fn test_bishop_attacks_blocked() {
        // d4 bishop with a blocker on f6
        let occ = 1u64 << 45;
        let attacks = slider_attacks(27, occ, true);
        assert!(attacks & (1 << 45) != 0);
        assert!(attacks & (1 << 54) == 0);
    }
}

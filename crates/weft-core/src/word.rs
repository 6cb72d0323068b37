//! Fixed-width memory words backed by little-endian u64 limbs

/// Bit mask covering the low `len` bits, `1 <= len <= 64`.
#[inline]
const fn low_mask(len: u32) -> u64 {
    if len == 64 {
        u64::MAX
    } else {
        (1u64 << len) - 1
    }
}

/// An opaque bit vector of fixed width, addressed in bit positions with
/// bit 0 the least significant. Widths are arbitrary positive bit counts;
/// divisibility rules live in [`crate::MemLayout`], not here.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Word {
    width: u32,
    limbs: Vec<u64>,
}

impl Word {
    /// All-zero word of the given width in bits.
    #[must_use]
    pub fn zero(width: u32) -> Self {
        assert!(width > 0, "word width must be positive");
        let nlimbs = (width as usize).div_ceil(64);
        Self {
            width,
            limbs: vec![0u64; nlimbs],
        }
    }

    #[inline]
    #[must_use]
    pub const fn width(&self) -> u32 {
        self.width
    }

    /// Read bits `[lo, lo + len)` as an integer, `1 <= len <= 64`.
    /// The window may straddle a limb boundary.
    #[must_use]
    pub fn get_bits(&self, lo: u32, len: u32) -> u64 {
        assert!((1..=64).contains(&len), "bit window must be 1..=64 bits");
        assert!(lo + len <= self.width, "bit window exceeds word width");
        let limb = (lo / 64) as usize;
        let off = lo % 64;
        let mut v = self.limbs[limb] >> off;
        if off + len > 64 {
            v |= self.limbs[limb + 1] << (64 - off);
        }
        v & low_mask(len)
    }

    /// Write bits `[lo, lo + len)`, `1 <= len <= 64`. Bits of `val` above
    /// `len` are truncated, matching fixed-width assignment.
    pub fn set_bits(&mut self, lo: u32, len: u32, val: u64) {
        assert!((1..=64).contains(&len), "bit window must be 1..=64 bits");
        assert!(lo + len <= self.width, "bit window exceeds word width");
        let val = val & low_mask(len);
        let limb = (lo / 64) as usize;
        let off = lo % 64;
        // shifts past bit 63 drop out the top, which is exactly the
        // truncation we want for the low limb
        let lo_mask = low_mask(len) << off;
        self.limbs[limb] = (self.limbs[limb] & !lo_mask) | (val << off);
        if off + len > 64 {
            let spill = off + len - 64;
            let hi_mask = low_mask(spill);
            self.limbs[limb + 1] = (self.limbs[limb + 1] & !hi_mask) | (val >> (64 - off));
        }
    }

    /// Extract bits `[lo, hi)` as a new word of width `hi - lo`.
    #[must_use]
    pub fn range(&self, lo: u32, hi: u32) -> Word {
        assert!(lo < hi && hi <= self.width, "bit range out of word");
        let mut out = Word::zero(hi - lo);
        let mut pos = 0;
        while pos < hi - lo {
            let take = (hi - lo - pos).min(64);
            out.set_bits(pos, take, self.get_bits(lo + pos, take));
            pos += take;
        }
        out
    }

    /// Overwrite bits `[lo, lo + src.width())` with the contents of `src`.
    pub fn set_range(&mut self, lo: u32, src: &Word) {
        assert!(lo + src.width <= self.width, "bit range out of word");
        let mut pos = 0;
        while pos < src.width {
            let take = (src.width - pos).min(64);
            self.set_bits(lo + pos, take, src.get_bits(pos, take));
            pos += take;
        }
    }

    /// Lane `i` of `lane_bits` each, least-significant lane first.
    #[inline]
    #[must_use]
    pub fn lane(&self, lane_bits: u32, i: u32) -> u64 {
        self.get_bits(i * lane_bits, lane_bits)
    }

    #[inline]
    pub fn set_lane(&mut self, lane_bits: u32, i: u32, val: u64) {
        self.set_bits(i * lane_bits, lane_bits, val);
    }

    /// Decompose into lanes of `lane_bits` each, least-significant first.
    /// `lane_bits` must divide the word width.
    #[must_use]
    pub fn to_lanes(&self, lane_bits: u32) -> Vec<u64> {
        assert!(
            self.width % lane_bits == 0,
            "lane width must divide word width"
        );
        (0..self.width / lane_bits)
            .map(|i| self.get_bits(i * lane_bits, lane_bits))
            .collect()
    }

    /// Compose a word from lanes, least-significant lane first. Lane values
    /// wider than `lane_bits` are truncated.
    #[must_use]
    pub fn from_lanes(lane_bits: u32, lanes: &[u64]) -> Word {
        assert!((1..=64).contains(&lane_bits), "lane width must be 1..=64");
        assert!(!lanes.is_empty(), "a word needs at least one lane");
        let count = u32::try_from(lanes.len()).expect("lane count overflows u32");
        let width = lane_bits
            .checked_mul(count)
            .expect("word width overflows u32");
        let mut w = Word::zero(width);
        for (i, &v) in lanes.iter().enumerate() {
            w.set_bits(i as u32 * lane_bits, lane_bits, v);
        }
        w
    }
}

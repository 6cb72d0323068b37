//! Mover geometry: word, lane and channel widths, validated once

/// Geometry of one mover pipeline instance. Fixed for the lifetime of a run;
/// every divisibility rule between the memory word, the data/index buses and
/// the lane count is checked here once, so the kernels can assume them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MemLayout {
    /// Memory word width in bits.
    pub mem_bits: u32,
    /// Width of one value lane in bits.
    pub data_bits: u32,
    /// Width of one index lane in bits.
    pub index_bits: u32,
    /// Lanes per transfer unit (one lane group).
    pub par_entries: u32,
    /// Number of logical channels the workload is partitioned into.
    pub channels: u32,
}

impl MemLayout {
    pub fn new(
        mem_bits: u32,
        data_bits: u32,
        index_bits: u32,
        par_entries: u32,
        channels: u32,
    ) -> Result<Self, String> {
        if mem_bits == 0 || data_bits == 0 || index_bits == 0 || par_entries == 0 || channels == 0 {
            return Err("all layout fields must be positive".into());
        }
        if data_bits > 64 || index_bits > 64 {
            return Err("lane widths above 64 bits are not supported".into());
        }
        if mem_bits % 2 != 0 {
            return Err("memory word width must be even".into());
        }
        let Some(group_bits) = data_bits.checked_mul(par_entries) else {
            return Err("data bus width overflows u32".into());
        };
        let Some(idx_group_bits) = index_bits.checked_mul(par_entries) else {
            return Err("index bus width overflows u32".into());
        };
        if mem_bits % group_bits != 0 {
            return Err("data bus width must divide memory word width".into());
        }
        if mem_bits % idx_group_bits != 0 {
            return Err("index bus width must divide memory word width".into());
        }
        Ok(Self {
            mem_bits,
            data_bits,
            index_bits,
            par_entries,
            channels,
        })
    }

    /// Bits in one half word.
    #[inline]
    #[must_use]
    pub const fn half_bits(&self) -> u32 {
        self.mem_bits / 2
    }

    /// Bits in one lane group (the data bus).
    #[inline]
    #[must_use]
    pub const fn group_bits(&self) -> u32 {
        self.data_bits * self.par_entries
    }

    /// Lane groups per memory word.
    #[inline]
    #[must_use]
    pub const fn groups_per_word(&self) -> u32 {
        self.mem_bits / self.group_bits()
    }

    /// Value lanes per memory word.
    #[inline]
    #[must_use]
    pub const fn lanes_per_word(&self) -> u32 {
        self.mem_bits / self.data_bits
    }
}

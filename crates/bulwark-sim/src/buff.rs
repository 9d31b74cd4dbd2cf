//! Buff ledger: the live temporary modifiers on one turret.
//!
//! Effective stats are always re-folded from the turret's base stats and the
//! product of every live buff's multipliers. The ledger never scales a
//! previous result, so an expiring buff cannot leave residue behind.
//! The fold is cached until the next addition or expiry.

use bulwark_core::enums::{PrefabKind, WeaponKind};
use bulwark_core::stats::{BaseStats, EffectiveStats, Multipliers};

/// A timed multiplicative modifier. Immutable once created.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Buff {
    damage_multiplier: f64,
    range_multiplier: f64,
    fire_rate_multiplier: f64,
    duration: f64,
    payload: Option<PrefabKind>,
}

impl Buff {
    /// Build a buff from percentage boosts; each multiplier is `1 + pct / 100`.
    pub fn from_percentages(
        damage_percent: f64,
        range_percent: f64,
        fire_rate_percent: f64,
        duration_secs: f64,
    ) -> Self {
        Self {
            damage_multiplier: 1.0 + damage_percent / 100.0,
            range_multiplier: 1.0 + range_percent / 100.0,
            fire_rate_multiplier: 1.0 + fire_rate_percent / 100.0,
            duration: duration_secs,
            payload: None,
        }
    }

    /// Attach an alternate hazard prefab, used while this buff is live.
    pub fn with_payload(mut self, prefab: PrefabKind) -> Self {
        self.payload = Some(prefab);
        self
    }

    pub fn damage_multiplier(&self) -> f64 {
        self.damage_multiplier
    }

    pub fn range_multiplier(&self) -> f64 {
        self.range_multiplier
    }

    pub fn fire_rate_multiplier(&self) -> f64 {
        self.fire_rate_multiplier
    }

    pub fn duration(&self) -> f64 {
        self.duration
    }

    pub fn payload(&self) -> Option<PrefabKind> {
        self.payload
    }

    pub fn multipliers(&self) -> Multipliers {
        Multipliers {
            damage: self.damage_multiplier,
            range: self.range_multiplier,
            fire_rate: self.fire_rate_multiplier,
        }
    }
}

/// A buff together with the absolute time it stops applying.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ActiveBuff {
    pub buff: Buff,
    pub expires_at: f64,
}

/// Insertion-ordered live buffs for exactly one turret.
#[derive(Debug, Clone)]
pub struct BuffLedger {
    kind: WeaponKind,
    buffs: Vec<ActiveBuff>,
    /// `None` means dirty.
    cached: Option<EffectiveStats>,
}

impl BuffLedger {
    pub fn new(kind: WeaponKind) -> Self {
        Self {
            kind,
            buffs: Vec::new(),
            cached: None,
        }
    }

    /// Append a buff expiring at `now + duration`. Returns false (and changes
    /// nothing) if the duration is not positive. An infinite duration never
    /// expires.
    pub fn add(&mut self, buff: Buff, now: f64) -> bool {
        if buff.duration.is_nan() || buff.duration <= 0.0 {
            tracing::debug!(duration = buff.duration, "ignoring buff with non-positive duration");
            return false;
        }
        self.buffs.push(ActiveBuff {
            buff,
            expires_at: now + buff.duration,
        });
        self.cached = None;
        true
    }

    /// Drop every buff whose expiry is at or before `now`.
    /// Returns how many were removed.
    pub fn tick(&mut self, now: f64) -> usize {
        let before = self.buffs.len();
        self.buffs.retain(|b| b.expires_at > now);
        let removed = before - self.buffs.len();
        if removed > 0 {
            self.cached = None;
        }
        removed
    }

    /// Product of every live buff's multipliers (identity when empty).
    pub fn multipliers(&self) -> Multipliers {
        self.buffs
            .iter()
            .fold(Multipliers::IDENTITY, |acc, b| acc.combine(b.buff.multipliers()))
    }

    /// The hazard payload of the most recently added live buff that carries one.
    pub fn hazard_payload(&self) -> Option<PrefabKind> {
        self.buffs.iter().rev().find_map(|b| b.buff.payload)
    }

    /// Effective stats for `base`, folded fresh if the ledger changed since
    /// the last call. `base` must be the same block on every call.
    pub fn effective_stats(&mut self, base: &BaseStats) -> EffectiveStats {
        if let Some(stats) = self.cached {
            return stats;
        }
        let stats =
            EffectiveStats::fold(base, self.kind, self.multipliers(), self.hazard_payload());
        self.cached = Some(stats);
        stats
    }

    pub fn is_dirty(&self) -> bool {
        self.cached.is_none()
    }

    pub fn iter(&self) -> impl Iterator<Item = &ActiveBuff> {
        self.buffs.iter()
    }

    pub fn len(&self) -> usize {
        self.buffs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buffs.is_empty()
    }
}

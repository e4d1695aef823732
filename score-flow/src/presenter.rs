//! Display-only classification of a credit score: a tier, color/ring style
//! tokens, and a progress-bar fill. Carries no business meaning.

/// Score domain the service is deployed with. Two alternative schemes are
/// observed in the wild; a deployment picks exactly one and never mixes
/// derivations against the same value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ScoreDomain {
    /// Traditional banded score. The reference service emits
    /// `300 + performance × 550`, so this is the default.
    #[default]
    Banded,
    /// Plain percentage score, 0–100.
    Percent,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScoreTier {
    Excellent,
    Good,
    Fair,
    Poor,
    VeryPoor,
}

impl ScoreTier {
    pub fn label(self) -> &'static str {
        match self {
            ScoreTier::Excellent => "excellent",
            ScoreTier::Good => "good",
            ScoreTier::Fair => "fair",
            ScoreTier::Poor => "poor",
            ScoreTier::VeryPoor => "very poor",
        }
    }
}

/// Presentation bucket for one score value.
#[derive(Debug, Clone, PartialEq)]
pub struct ScorePresentation {
    pub tier: ScoreTier,
    pub color_class: &'static str,
    pub ring_class: &'static str,
    /// Progress-bar fill, clamped to [0, 100].
    pub fill_percent: f64,
}

/// Bucket a score under the given domain.
pub fn present(score: f64, domain: ScoreDomain) -> ScorePresentation {
    match domain {
        ScoreDomain::Banded => present_banded(score),
        ScoreDomain::Percent => present_percent(score),
    }
}

fn present_banded(score: f64) -> ScorePresentation {
    let (tier, color_class, ring_class) = if score >= 800.0 {
        (
            ScoreTier::Excellent,
            "text-emerald-400",
            "bg-emerald-500/20 ring-emerald-400",
        )
    } else if score >= 740.0 {
        (
            ScoreTier::Good,
            "text-green-400",
            "bg-green-500/20 ring-green-400",
        )
    } else if score >= 670.0 {
        (
            ScoreTier::Fair,
            "text-lime-400",
            "bg-lime-400/20 ring-lime-400",
        )
    } else if score >= 580.0 {
        (
            ScoreTier::Poor,
            "text-yellow-400",
            "bg-yellow-400/20 ring-yellow-400",
        )
    } else {
        (
            ScoreTier::VeryPoor,
            "text-red-400",
            "bg-red-500/20 ring-red-400",
        )
    };
    ScorePresentation {
        tier,
        color_class,
        ring_class,
        fill_percent: ((score - 300.0) / 600.0 * 100.0).clamp(0.0, 100.0),
    }
}

fn present_percent(score: f64) -> ScorePresentation {
    let (tier, color_class, ring_class) = if score >= 80.0 {
        (
            ScoreTier::Excellent,
            "text-green-400",
            "from-green-500/20 to-emerald-500/20 border-green-500/30",
        )
    } else if score >= 60.0 {
        (
            ScoreTier::Good,
            "text-yellow-400",
            "from-yellow-500/20 to-orange-500/20 border-yellow-500/30",
        )
    } else {
        (
            ScoreTier::Poor,
            "text-red-400",
            "from-red-500/20 to-pink-500/20 border-red-500/30",
        )
    };
    ScorePresentation {
        tier,
        color_class,
        ring_class,
        fill_percent: score.clamp(0.0, 100.0),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn percent_domain_buckets_at_80_and_60() {
        let excellent = present(85.0, ScoreDomain::Percent);
        assert_eq!(excellent.tier.label(), "excellent");
        assert_eq!(excellent.fill_percent, 85.0);

        assert_eq!(present(80.0, ScoreDomain::Percent).tier, ScoreTier::Excellent);
        assert_eq!(present(79.9, ScoreDomain::Percent).tier, ScoreTier::Good);
        assert_eq!(present(60.0, ScoreDomain::Percent).tier, ScoreTier::Good);
        assert_eq!(present(59.9, ScoreDomain::Percent).tier, ScoreTier::Poor);
    }

    #[test]
    fn banded_domain_has_five_color_bands() {
        assert_eq!(present(805.0, ScoreDomain::Banded).color_class, "text-emerald-400");
        assert_eq!(present(800.0, ScoreDomain::Banded).tier, ScoreTier::Excellent);
        assert_eq!(present(750.0, ScoreDomain::Banded).color_class, "text-green-400");
        assert_eq!(present(700.0, ScoreDomain::Banded).color_class, "text-lime-400");
        assert_eq!(present(600.0, ScoreDomain::Banded).color_class, "text-yellow-400");
        assert_eq!(present(450.0, ScoreDomain::Banded).color_class, "text-red-400");
        assert_eq!(present(450.0, ScoreDomain::Banded).ring_class, "bg-red-500/20 ring-red-400");
    }

    #[test]
    fn banded_fill_rescales_300_to_900_and_clamps() {
        assert_eq!(present(300.0, ScoreDomain::Banded).fill_percent, 0.0);
        assert_eq!(present(600.0, ScoreDomain::Banded).fill_percent, 50.0);
        assert_eq!(present(900.0, ScoreDomain::Banded).fill_percent, 100.0);
        assert_eq!(present(150.0, ScoreDomain::Banded).fill_percent, 0.0);
        assert_eq!(present(1200.0, ScoreDomain::Banded).fill_percent, 100.0);
    }

    #[test]
    fn percent_fill_clamps_out_of_range_scores() {
        assert_eq!(present(-5.0, ScoreDomain::Percent).fill_percent, 0.0);
        assert_eq!(present(130.0, ScoreDomain::Percent).fill_percent, 100.0);
    }
}

use crate::dashboard::model::LayoutItem;
use serde::{Deserialize, Serialize};

/// Responsive breakpoints, widest first.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Breakpoint {
    Lg,
    Md,
    Sm,
    Xs,
    Xxs,
}

impl Breakpoint {
    pub const ALL: [Breakpoint; 5] = [
        Breakpoint::Lg,
        Breakpoint::Md,
        Breakpoint::Sm,
        Breakpoint::Xs,
        Breakpoint::Xxs,
    ];

    pub fn columns(&self) -> u32 {
        match self {
            Breakpoint::Lg => 4,
            Breakpoint::Md => 3,
            Breakpoint::Sm => 2,
            Breakpoint::Xs | Breakpoint::Xxs => 1,
        }
    }

    /// Smallest viewport width, in pixels, this breakpoint applies to.
    pub fn min_width(&self) -> u32 {
        match self {
            Breakpoint::Lg => 1200,
            Breakpoint::Md => 996,
            Breakpoint::Sm => 768,
            Breakpoint::Xs => 480,
            Breakpoint::Xxs => 0,
        }
    }

    pub fn for_width(px: u32) -> Self {
        Self::ALL
            .into_iter()
            .find(|bp| px >= bp.min_width())
            .unwrap_or(Breakpoint::Xxs)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Breakpoint::Lg => "lg",
            Breakpoint::Md => "md",
            Breakpoint::Sm => "sm",
            Breakpoint::Xs => "xs",
            Breakpoint::Xxs => "xxs",
        }
    }
}

/// Project the canonical (lg) layout onto `bp`. Positions and heights pass
/// through untouched; only widths and minimums are clamped.
pub fn project(canonical: &[LayoutItem], bp: Breakpoint) -> Vec<LayoutItem> {
    canonical
        .iter()
        .map(|item| {
            let mut out = item.clone();
            let min_h = item.min_h.unwrap_or(1);
            match bp {
                Breakpoint::Lg => {
                    out.min_w = Some(item.min_w.unwrap_or(1));
                }
                Breakpoint::Md => {
                    out.w = item.w.min(3);
                    out.min_w = Some(item.min_w.unwrap_or(1).min(2));
                }
                Breakpoint::Sm => {
                    out.w = item.w.min(2);
                    out.min_w = Some(1);
                }
                Breakpoint::Xs | Breakpoint::Xxs => {
                    out.w = 1;
                    out.min_w = Some(1);
                }
            }
            out.min_h = Some(min_h);
            out
        })
        .collect()
}

/// Per-breakpoint layouts handed to a responsive grid renderer.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ResponsiveLayouts {
    pub lg: Vec<LayoutItem>,
    pub md: Vec<LayoutItem>,
    pub sm: Vec<LayoutItem>,
    pub xs: Vec<LayoutItem>,
    pub xxs: Vec<LayoutItem>,
}

impl ResponsiveLayouts {
    pub fn get(&self, bp: Breakpoint) -> &[LayoutItem] {
        match bp {
            Breakpoint::Lg => &self.lg,
            Breakpoint::Md => &self.md,
            Breakpoint::Sm => &self.sm,
            Breakpoint::Xs => &self.xs,
            Breakpoint::Xxs => &self.xxs,
        }
    }
}

pub fn project_all(canonical: &[LayoutItem]) -> ResponsiveLayouts {
    ResponsiveLayouts {
        lg: project(canonical, Breakpoint::Lg),
        md: project(canonical, Breakpoint::Md),
        sm: project(canonical, Breakpoint::Sm),
        xs: project(canonical, Breakpoint::Xs),
        xxs: project(canonical, Breakpoint::Xxs),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn canonical() -> Vec<LayoutItem> {
        let mut wide = LayoutItem::new("wide", 0, 0, 4, 2);
        wide.min_w = Some(3);
        wide.min_h = Some(2);
        vec![wide, LayoutItem::new("narrow", 0, 2, 1, 3)]
    }

    #[test]
    fn breakpoint_for_width() {
        assert_eq!(Breakpoint::for_width(1920), Breakpoint::Lg);
        assert_eq!(Breakpoint::for_width(1200), Breakpoint::Lg);
        assert_eq!(Breakpoint::for_width(1000), Breakpoint::Md);
        assert_eq!(Breakpoint::for_width(800), Breakpoint::Sm);
        assert_eq!(Breakpoint::for_width(480), Breakpoint::Xs);
        assert_eq!(Breakpoint::for_width(10), Breakpoint::Xxs);
    }

    #[test]
    fn lg_only_fills_missing_minimums() {
        let lg = project(&canonical(), Breakpoint::Lg);
        assert_eq!(lg[0].w, 4);
        assert_eq!(lg[0].min_w, Some(3));
        assert_eq!(lg[1].min_w, Some(1));
        assert_eq!(lg[1].min_h, Some(1));
    }

    #[test]
    fn narrower_breakpoints_clamp_width() {
        let items = canonical();
        let md = project(&items, Breakpoint::Md);
        assert_eq!((md[0].w, md[0].min_w, md[0].min_h), (3, Some(2), Some(2)));
        let sm = project(&items, Breakpoint::Sm);
        assert_eq!((sm[0].w, sm[0].min_w), (2, Some(1)));
        let xs = project(&items, Breakpoint::Xs);
        assert_eq!((xs[0].w, xs[0].x, xs[0].y, xs[0].h), (1, 0, 0, 2));
    }

    #[test]
    fn projected_widths_fit_and_never_grow() {
        let items = canonical();
        let all = project_all(&items);
        for bp in Breakpoint::ALL {
            for (projected, original) in all.get(bp).iter().zip(&items) {
                assert!(projected.w <= original.w);
                assert!(projected.w <= bp.columns());
                assert!(projected.min_w.unwrap_or(1) <= projected.w);
            }
        }
    }
}

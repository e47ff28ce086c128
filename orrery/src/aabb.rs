use crate::math::DVec2;

/// Axis-aligned box, lower corner first.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AABB(pub DVec2, pub DVec2);

impl AABB {
    pub fn from_center(c: DVec2, span: DVec2) -> Self {
        let low = c - span / 2.0;
        let hi = c + span / 2.0;
        Self(low, hi)
    }

    pub fn from_list(plist: &[DVec2]) -> Option<Self> {
        let p0 = plist.first()?;
        let mut ret = AABB(*p0, *p0);
        for p in plist {
            ret.include(*p)
        }
        Some(ret)
    }

    /// Grows each side by the matching component of `padding`.
    pub fn padded(&self, padding: DVec2) -> Self {
        AABB(self.0 - padding, self.1 + padding)
    }

    pub fn include(&mut self, p: DVec2) {
        self.0 = self.0.min(p);
        self.1 = self.1.max(p);
    }

    pub fn union(&self, other: &AABB) -> Self {
        AABB(self.0.min(other.0), self.1.max(other.1))
    }

    pub fn center(&self) -> DVec2 {
        (self.0 + self.1) / 2.0
    }

    pub fn span(&self) -> DVec2 {
        self.1 - self.0
    }

    pub fn to_normalized(&self, p: DVec2) -> DVec2 {
        let u = p - self.0;
        let s = self.span();
        u / s
    }

    pub fn contains(&self, p: DVec2) -> bool {
        let u = self.to_normalized(p);
        0.0 <= u.x && u.x <= 1.0 && 0.0 <= u.y && u.y <= 1.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn box_from_points() {
        let pts = [
            DVec2::new(1.0, -2.0),
            DVec2::new(-3.0, 0.5),
            DVec2::new(0.0, 4.0),
        ];
        let aabb = AABB::from_list(&pts).unwrap();
        assert_eq!(aabb, AABB(DVec2::new(-3.0, -2.0), DVec2::new(1.0, 4.0)));
        assert_eq!(aabb.span(), DVec2::new(4.0, 6.0));
        assert_eq!(aabb.center(), DVec2::new(-1.0, 1.0));
        assert!(pts.iter().all(|p| aabb.contains(*p)));
        assert!(!aabb.contains(DVec2::new(2.0, 0.0)));

        assert!(AABB::from_list(&[]).is_none());
    }

    #[test]
    fn padding_and_union() {
        let a = AABB::from_center(DVec2::ZERO, DVec2::new(2.0, 4.0));
        assert_eq!(a, AABB(DVec2::new(-1.0, -2.0), DVec2::new(1.0, 2.0)));

        let p = a.padded(DVec2::new(0.5, 1.0));
        assert_eq!(p, AABB(DVec2::new(-1.5, -3.0), DVec2::new(1.5, 3.0)));

        let b = AABB(DVec2::new(0.0, 0.0), DVec2::new(5.0, 1.0));
        assert_eq!(a.union(&b), AABB(DVec2::new(-1.0, -2.0), DVec2::new(5.0, 2.0)));
    }

    #[test]
    fn normalized_coordinates() {
        let a = AABB(DVec2::new(-2.0, 0.0), DVec2::new(2.0, 10.0));
        assert_eq!(a.to_normalized(DVec2::new(0.0, 5.0)), DVec2::new(0.5, 0.5));
        assert_eq!(a.to_normalized(DVec2::new(2.0, 0.0)), DVec2::new(1.0, 0.0));
    }
}

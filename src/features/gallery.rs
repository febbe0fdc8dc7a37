//! Space gallery photo catalog
//!
//! A fixed, hand-authored list of externally hosted photos. The lightbox
//! cycles through them with wrap-around navigation at both ends.

/// A gallery photo with its caption
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Photo {
    pub url: &'static str,
    pub title: &'static str,
}

pub const PHOTOS: [Photo; 12] = [
    Photo {
        url: "https://images.unsplash.com/photo-1462331940025-496dfbfc7564",
        title: "Nebulosa Espacial",
    },
    Photo {
        url: "https://images.unsplash.com/photo-1419242902214-272b3f66ee7a",
        title: "Vía Láctea",
    },
    Photo {
        url: "https://images.unsplash.com/photo-1543722530-d2c3201371e7",
        title: "Galaxia Espiral",
    },
    Photo {
        url: "https://images.unsplash.com/photo-1451187580459-43490279c0fa",
        title: "Estrellas Distantes",
    },
    Photo {
        url: "https://images.unsplash.com/photo-1446776811953-b23d57bd21aa",
        title: "Constelación",
    },
    Photo {
        url: "https://images.unsplash.com/photo-1464802686167-b939a6910659",
        title: "Aurora Espacial",
    },
    Photo {
        url: "https://images.unsplash.com/photo-1506443432602-ac2fcd6f54e0",
        title: "Polvo Estelar",
    },
    Photo {
        url: "https://images.unsplash.com/photo-1454789548928-9efd52dc4031",
        title: "Nebulosa Azul",
    },
    Photo {
        url: "https://images.unsplash.com/photo-1465101162946-4377e57745c3",
        title: "Campo Estelar",
    },
    Photo {
        url: "https://images.unsplash.com/photo-1516339901601-2e1b62dc0c45",
        title: "Galaxia Lejana",
    },
    Photo {
        url: "https://images.unsplash.com/photo-1502134249126-9f3755a50d78",
        title: "Nebulosa Púrpura",
    },
    Photo {
        url: "https://images.unsplash.com/photo-1444703686981-a3abbc4d4fe3",
        title: "Cúmulo Estelar",
    },
];

/// Index of the photo after `index`, wrapping past the end
pub fn next_index(index: usize) -> usize {
    (index + 1) % PHOTOS.len()
}

/// Index of the photo before `index`, wrapping past the start
pub fn prev_index(index: usize) -> usize {
    (index + PHOTOS.len() - 1) % PHOTOS.len()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn next_wraps_from_last_to_first() {
        assert_eq!(next_index(PHOTOS.len() - 1), 0);
        assert_eq!(next_index(0), 1);
    }

    #[test]
    fn prev_wraps_from_first_to_last() {
        assert_eq!(prev_index(0), PHOTOS.len() - 1);
        assert_eq!(prev_index(5), 4);
    }

    #[test]
    fn a_full_cycle_visits_every_photo_once() {
        let mut seen = [false; PHOTOS.len()];
        let mut idx = 0;
        for _ in 0..PHOTOS.len() {
            assert!(!seen[idx]);
            seen[idx] = true;
            idx = next_index(idx);
        }
        assert_eq!(idx, 0);
        assert!(seen.iter().all(|&s| s));
    }
}

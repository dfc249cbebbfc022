//! Static content of the Home tab.

use crate::ui::viewmodel::{DashboardItem, DashboardSection, HomeViewModel, ProfileCard};

fn item(title: &str, detail: &str, action: Option<&str>) -> DashboardItem {
    DashboardItem {
        title: title.to_string(),
        detail: detail.to_string(),
        action: action.map(str::to_string),
    }
}

/// The dashboard shown on the Home tab.
#[must_use]
pub fn dashboard() -> HomeViewModel {
    HomeViewModel {
        profile: ProfileCard {
            name: "Ahmet Aktaş".to_string(),
            league: "Bronz Ligi Çekmeköy".to_string(),
            score: 526,
        },
        sections: vec![
            DashboardSection {
                title: "Ödüllü Seri".to_string(),
                items: vec![
                    item("Günlük Çözüm", "5 günlük seri", Some("Çöz")),
                    item("Haftalık Çözüm", "Soru 56", Some("Tamamlandı")),
                ],
            },
            DashboardSection {
                title: "Türkiye Geneli Deneme".to_string(),
                items: vec![
                    item("20.08.2022 Pazar 09.30", "5546 Katılımcı", Some("Katıl")),
                    item("Bir Önceki Deneme", "Net: 96.50", None),
                    item("Yanlışları Çöz", "Günlük Çözüm", Some("Çöz")),
                ],
            },
        ],
    }
}

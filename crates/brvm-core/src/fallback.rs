//! Fixed example datasets.
//!
//! Served in snapshot mode whenever the day's file cannot be read, and
//! always for news (which has no snapshot file). The values are part of the
//! dashboard's observable behavior; keep them stable.

use crate::time_util;
use crate::types::*;

/// `closed`, stamped with the current local time.
pub fn market_status() -> MarketStatus {
    MarketStatus {
        status: MarketState::Closed,
        last_update: time_util::display_now(),
    }
}

pub fn indices() -> Vec<IndexQuote> {
    vec![
        IndexQuote::new("BRVM Composite", 218.45, 0.72),
        IndexQuote::new("BRVM 10", 164.29, 0.94),
        IndexQuote::new("BRVM Agriculture", 132.56, -0.32),
        IndexQuote::new("BRVM Distribution", 518.23, 1.42),
        IndexQuote::new("BRVM Finance", 158.67, 0.28),
        IndexQuote::new("BRVM Industrie", 201.34, 0.55),
        IndexQuote::new("BRVM Services Publics", 178.92, 0.87),
        IndexQuote::new("BRVM Transport", 142.18, -0.45),
    ]
}

pub fn stocks() -> Vec<StockQuote> {
    vec![
        StockQuote::new("BICC", "BICI Côte d'Ivoire", 6300.0, 1.61, 6400.0, 6200.0, 1250),
        StockQuote::new("BOAB", "Bank of Africa Bénin", 3950.0, -0.88, 4000.0, 3900.0, 832),
        StockQuote::new("BOAM", "Bank of Africa Mali", 1350.0, 0.00, 1350.0, 1350.0, 420),
        StockQuote::new("CABC", "Compagnie Agricole du Bois Carré", 435.0, 2.11, 440.0, 425.0, 2150),
        StockQuote::new("ETIT", "Ecobank Transnational Inc", 18.0, -1.64, 18.5, 17.9, 45280),
        StockQuote::new("ONTBF", "Onatel Burkina Faso", 2500.0, 0.40, 2515.0, 2490.0, 370),
        StockQuote::new("PALC", "Palm Côte d'Ivoire", 6750.0, 0.75, 6800.0, 6700.0, 220),
        StockQuote::new("SGBC", "SGB Côte d'Ivoire", 12500.0, 1.21, 12600.0, 12400.0, 180),
        StockQuote::new("SIVC", "SOLIBRA Côte d'Ivoire", 18000.0, 0.00, 18000.0, 18000.0, 95),
        StockQuote::new("SNTS", "Sonatel Sénégal", 16100.0, 0.63, 16250.0, 16050.0, 650),
    ]
}

pub fn bonds() -> Vec<BondQuote> {
    vec![
        BondQuote::new("TPCI.O1", "Trésor Public Côte d'Ivoire 6.5% 2021-2028", 9850.0, 0.10, 6.75, "2028-06-15"),
        BondQuote::new("TPCI.O2", "Trésor Public Côte d'Ivoire 5.75% 2022-2027", 9920.0, 0.05, 5.95, "2027-03-22"),
        BondQuote::new("TPSN.O3", "Trésor Public Sénégal 6.25% 2020-2026", 9880.0, -0.15, 6.45, "2026-11-08"),
        BondQuote::new("TPBF.O1", "Trésor Public Burkina Faso 6.10% 2021-2029", 9790.0, 0.25, 6.65, "2029-09-30"),
        BondQuote::new("SBCI.O1", "SGBCI 5.9% 2022-2027", 9950.0, 0.00, 6.05, "2027-05-12"),
        BondQuote::new("BIDC.O1", "BIDC/EBID 6.0% 2021-2028", 9930.0, -0.05, 6.10, "2028-07-20"),
        BondQuote::new("BOAD.O2", "BOAD 5.85% 2022-2029", 9910.0, 0.05, 6.00, "2029-02-10"),
        BondQuote::new("TPML.O1", "Trésor Public Mali 6.2% 2021-2026", 9800.0, -0.10, 6.50, "2026-08-15"),
    ]
}

pub fn news() -> Vec<NewsItem> {
    vec![
        NewsItem::new(
            "La BRVM clôture en hausse de 0.72% ce vendredi",
            "2025-03-21",
            "Le marché actions de la Bourse Régionale des Valeurs Mobilières (BRVM) a terminé la séance de ce vendredi en territoire positif avec une progression de 0,72% de l'indice BRVM Composite.",
            "BRVM",
        ),
        NewsItem::new(
            "Sonatel publie des résultats en hausse pour 2024",
            "2025-03-20",
            "Le groupe Sonatel a annoncé des résultats en hausse pour l'exercice 2024, avec un chiffre d'affaires en progression de 7,2% et un résultat net en hausse de 9,5%.",
            "Agence Ecofin",
        ),
        NewsItem::new(
            "Nouvelle émission obligataire du Trésor Public de Côte d'Ivoire",
            "2025-03-18",
            "Le Trésor Public de Côte d'Ivoire a lancé une nouvelle émission obligataire de 100 milliards FCFA sur le marché financier régional avec un taux d'intérêt de 6,15%.",
            "Financial Afrik",
        ),
        NewsItem::new(
            "La BOAD annonce un plan de financement de 500 milliards FCFA pour soutenir les économies de l'UEMOA",
            "2025-03-15",
            "La Banque Ouest Africaine de Développement (BOAD) a annoncé un plan de financement de 500 milliards FCFA pour soutenir les économies des pays membres de l'UEMOA face aux défis économiques actuels.",
            "Jeune Afrique",
        ),
        NewsItem::new(
            "ECOBANK Transnational Incorporated distribue un dividende de 0,16 USD par action",
            "2025-03-12",
            "Le groupe bancaire panafricain ETI a annoncé la distribution d'un dividende de 0,16 USD par action au titre de l'exercice 2024, en hausse de 12% par rapport à l'année précédente.",
            "BRVM",
        ),
    ]
}

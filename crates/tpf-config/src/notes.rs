//! Research-note selection.

use serde::{Deserialize, Serialize};

fn default_excluded() -> Vec<String> {
    [
        "search_results_fisher_rate.md",
        "SYNTHESIS_EvolutionOfEquityValuation.md",
        "SYNTHESIS_ValuationConceptEvolution.md",
        "Capitalization_vs_Discounting.md",
    ]
    .into_iter()
    .map(String::from)
    .collect()
}

/// Textbook notes plus the Modigliani-Miller papers. Other notes keep their
/// evidence pages but stay off the timeline.
fn default_timeline_slugs() -> Vec<String> {
    [
        // Pre-1900 books
        "Valuation_Hutcheson1720_EarliestEquityValuation",
        "Valuation_Fairman1795_FirstYieldComparison",
        "Valuation_Crump1874_SpeculationTheory",
        "Valuation_Aubrey1896_StockExchangeInvestments",
        // Early twentieth-century textbooks
        "Valuation_Mead1910_CorporationFinance",
        "Valuation_Lyon1917_FinanceCurriculum",
        "Valuation_Dewing1920_FinancialPolicy",
        "Valuation_Smith1924_StocksAsInvestments",
        "Valuation_Gerstenberg1924_CorpFinTextbook",
        "Valuation_Badger1925_EarningsCapitalization",
        "Valuation_Fisher1907_RateOfInterest",
        "Valuation_Fisher1930_TheoryOfInterest",
        "Valuation_BerleMeans1932_ModernCorporation",
        "Valuation_Bonbright1937_PropertyValuation",
        "Valuation_Williams1938_InvestmentValue",
        "Valuation_GrahamDodd1940_SecurityAnalysis",
        "Valuation_GuthmannDougall1940_CorporateFinancialPolicy",
        // Transitional era
        "Valuation_Dean1951_CapitalBudgeting",
        "Valuation_Markowitz1959_PortfolioSelection",
        "Valuation_Solomon1963_TheoryOfFinancialManagement",
        "CreditRisk_Hickman1958_CorporateBondQuality",
        // Modigliani-Miller papers
        "Valuation_ModiglianiMiller1958_CostOfCapital",
        "CapitalStructure_ModiglianiMiller1958_CostOfCapitalCorporationFinance",
        "Valuation_MillerModigliani1961_DividendPolicy",
        "Dividends_MillerModigliani1961_DividendPolicyGrowthValuation",
        "Valuation_MM1963_CorporateIncomeTaxesCostOfCapital",
        // Post-split textbooks
        "Valuation_Brealey1969_RiskAndReturn",
        "Textbook_VanHorne1971_FinancialManagementPolicy",
        "Valuation_CraggMalkiel1982_ExpectationsSharePrices",
        "Textbook_CopelandWeston1988_FinancialTheoryCorporatePolicy",
        "Textbook_Weston1962_ManagerialFinance",
        "Brealey_Myers_EPS_Treatment_6th7thEd",
        "Valuation_Damodaran2012_InvestmentValuation",
        "Valuation_Gordon1963_OptimalInvestmentFinancingPolicy",
    ]
    .into_iter()
    .map(String::from)
    .collect()
}

#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
pub struct NotesConfig {
    /// Note filenames that are never loaded (syntheses, search dumps).
    #[serde(default = "default_excluded")]
    pub excluded: Vec<String>,

    /// Slugs allowed on the timeline. Set to `[]` to admit every note with
    /// a year.
    #[serde(default = "default_timeline_slugs")]
    pub timeline_slugs: Vec<String>,
}

impl Default for NotesConfig {
    fn default() -> Self {
        Self {
            excluded: default_excluded(),
            timeline_slugs: default_timeline_slugs(),
        }
    }
}

impl NotesConfig {
    #[must_use]
    pub fn is_excluded(&self, filename: &str) -> bool {
        self.excluded.iter().any(|name| name == filename)
    }

    #[must_use]
    pub fn admits_on_timeline(&self, slug: &str) -> bool {
        self.timeline_slugs.is_empty() || self.timeline_slugs.iter().any(|s| s == slug)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_allow_list_keeps_textbooks_and_mm_papers() {
        let config = NotesConfig::default();
        assert!(config.admits_on_timeline("Valuation_Dean1951_CapitalBudgeting"));
        assert!(config.admits_on_timeline("Valuation_ModiglianiMiller1958_CostOfCapital"));
        assert!(!config.admits_on_timeline("SYNTHESIS_EvolutionOfEquityValuation"));
        assert!(!config.admits_on_timeline("EPS_GrahamHarveyRajgopal2005_Survey"));
        assert!(config.is_excluded("Capitalization_vs_Discounting.md"));
    }

    #[test]
    fn empty_allow_list_admits_everything() {
        let config = NotesConfig {
            timeline_slugs: Vec::new(),
            ..Default::default()
        };
        assert!(config.admits_on_timeline("EPS_GrahamHarveyRajgopal2005_Survey"));
    }

    #[test]
    fn allow_list_restricts_timeline() {
        let config = NotesConfig {
            timeline_slugs: vec!["Valuation_Dean1951_CapitalBudgeting".to_string()],
            ..Default::default()
        };
        assert!(config.admits_on_timeline("Valuation_Dean1951_CapitalBudgeting"));
        assert!(!config.admits_on_timeline("EPS_GrahamHarveyRajgopal2005_Survey"));
    }
}

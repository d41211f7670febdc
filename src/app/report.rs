use crate::domain::model::{QuoteRequest, QuoteResult};
use crate::utils::error::Result;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// What the CLI prints: the quote plus the context it was computed in.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuoteReport {
    pub calculator: String,
    pub currency: String,
    pub generated_at: DateTime<Utc>,
    pub request: QuoteRequest,
    pub result: QuoteResult,
}

impl QuoteReport {
    pub fn new(
        calculator: impl Into<String>,
        currency: impl Into<String>,
        request: QuoteRequest,
        result: QuoteResult,
    ) -> Self {
        Self {
            calculator: calculator.into(),
            currency: currency.into(),
            generated_at: Utc::now(),
            request,
            result,
        }
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// One row per breakdown line followed by a total row.
    pub fn to_csv(&self) -> Result<String> {
        let mut writer = csv::Writer::from_writer(Vec::new());
        writer.write_record(["component", "service", "label", "amount", "currency"])?;

        for line in &self.result.breakdown {
            let service = line
                .service
                .map(|s| s.to_string())
                .unwrap_or_else(|| "bundle".to_string());
            writer.write_record([
                line.component.as_str(),
                service.as_str(),
                line.label.as_str(),
                line.amount.to_string().as_str(),
                self.currency.as_str(),
            ])?;
        }

        writer.write_record([
            "total",
            "",
            "Monthly price",
            self.result.monthly_price.to_string().as_str(),
            self.currency.as_str(),
        ])?;

        let data = writer.into_inner().map_err(|e| e.into_error())?;
        Ok(String::from_utf8_lossy(&data).into_owned())
    }

    pub fn to_text(&self) -> String {
        let result = &self.result;
        if result.is_empty() {
            return "No quote yet: pick a service to get an estimate.\n".to_string();
        }

        let mut out = String::new();
        let service = self
            .request
            .service_type
            .map(|s| s.to_string())
            .unwrap_or_default();
        out.push_str(&format!("Estimate for {}\n", service));
        out.push_str(&format!(
            "Monthly price: {} {}\n",
            result.monthly_price, self.currency
        ));
        out.push_str(&format!(
            "Estimated hours: {}\n\n",
            crate::core::ledger::format_hours(result.estimated_hours)
        ));

        out.push_str("Breakdown:\n");
        let width = result
            .breakdown
            .iter()
            .map(|line| line.label.chars().count())
            .max()
            .unwrap_or(0);
        for line in &result.breakdown {
            out.push_str(&format!(
                "  {:<width$}  {:>8}\n",
                line.label,
                line.amount,
                width = width
            ));
        }

        out.push_str("\nIncludes:\n");
        for item in &result.includes {
            out.push_str(&format!("  - {}\n", item));
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::pricing::PricingTable;
    use crate::core::engine::compute_quote;
    use crate::domain::model::{GraphicOrder, VideoOrder};

    fn report(request: QuoteRequest) -> QuoteReport {
        let result = compute_quote(&request, &PricingTable::default());
        QuoteReport::new("quote-calc", "USD", request, result)
    }

    #[test]
    fn test_csv_has_total_row() {
        let report = report(QuoteRequest::both(
            GraphicOrder {
                social_media: 10,
                ..GraphicOrder::default()
            },
            VideoOrder::tiered(2, 0, 0),
        ));

        let csv_text = report.to_csv().unwrap();
        let mut reader = csv::Reader::from_reader(csv_text.as_bytes());
        let rows: Vec<csv::StringRecord> = reader.records().map(|r| r.unwrap()).collect();

        assert_eq!(rows.len(), report.result.breakdown.len() + 1);
        assert_eq!(&rows[0][0], "base");
        assert_eq!(&rows[0][1], "graphic design");

        let discount = &rows[rows.len() - 2];
        assert_eq!(&discount[0], "bundle_discount");
        assert_eq!(&discount[1], "bundle");

        let total = rows.last().unwrap();
        assert_eq!(&total[0], "total");
        assert_eq!(&total[3], "2430");
    }

    #[test]
    fn test_json_uses_camel_case() {
        let report = report(QuoteRequest::video(VideoOrder::tiered(1, 0, 0)));
        let value: serde_json::Value = serde_json::from_str(&report.to_json().unwrap()).unwrap();

        assert_eq!(value["result"]["monthlyPrice"], 1500);
        assert_eq!(value["result"]["estimatedHours"], 20.0);
        assert_eq!(value["request"]["serviceType"], "video");
        assert!(value["generatedAt"].is_string());
    }

    #[test]
    fn test_text_for_empty_quote() {
        let report = report(QuoteRequest::default());
        assert!(report.to_text().starts_with("No quote yet"));
    }

    #[test]
    fn test_text_lists_breakdown_and_includes() {
        let report = report(QuoteRequest::graphic(GraphicOrder {
            social_media: 10,
            bilingual: true,
            ..GraphicOrder::default()
        }));
        let text = report.to_text();

        assert!(text.contains("Monthly price: 1380 USD"));
        assert!(text.contains("Bilingual surcharge (15%)"));
        assert!(text.contains("  - Dedicated graphic designer"));
    }
}

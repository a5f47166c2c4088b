// src/services/document_service.rs

use genpdf::{elements, style, Element};

use crate::{
    common::error::AppError,
    models::report::{ItemStatus, Report, ReportQuery},
};

// Renderiza o recap imprimível de checklists. A tela de impressão do front
// virou um documento PDF gerado aqui, com o mesmo contrato de query string.
#[derive(Clone)]
pub struct DocumentService;

impl DocumentService {
    pub fn new() -> Self {
        Self
    }

    pub fn render_checklist_recap(
        &self,
        reports: &[Report],
        query: &ReportQuery,
    ) -> Result<Vec<u8>, AppError> {
        // Carrega a fonte da pasta 'fonts/'
        let font_family = genpdf::fonts::from_files("./fonts", "Roboto", None)
            .map_err(|_| AppError::FontNotFound("Fonte não encontrada na pasta ./fonts".to_string()))?;

        let mut doc = genpdf::Document::new(font_family);
        doc.set_title("Recap de Checklists da Frota");
        let mut decorator = genpdf::SimplePageDecorator::new();
        decorator.set_margins(10);
        doc.set_page_decorator(decorator);

        // --- CABEÇALHO ---
        doc.push(
            elements::Paragraph::new("RECAP DE CHECKLISTS DA FROTA")
                .styled(style::Style::new().bold().with_font_size(16)),
        );

        let period = match (query.from, query.to) {
            (Some(from), Some(to)) => format!(
                "Período: {} a {}",
                from.format("%d/%m/%Y"),
                to.format("%d/%m/%Y")
            ),
            (Some(from), None) => format!("A partir de {}", from.format("%d/%m/%Y")),
            (None, Some(to)) => format!("Até {}", to.format("%d/%m/%Y")),
            (None, None) => "Período completo".to_string(),
        };
        doc.push(elements::Paragraph::new(period).styled(style::Style::new().with_font_size(10)));

        if let Some(vehicle) = &query.vehicle_id {
            doc.push(
                elements::Paragraph::new(format!("Veículo: {}", vehicle))
                    .styled(style::Style::new().with_font_size(10)),
            );
        }
        if let Some(location) = &query.location {
            doc.push(
                elements::Paragraph::new(format!("Local: {}", location))
                    .styled(style::Style::new().with_font_size(10)),
            );
        }

        doc.push(elements::Break::new(1.5));

        // --- TABELA DE CHECKLISTS ---
        // Pesos das colunas: Data (2), Casco (2), Operador (3), Status (2), Observações (4)
        let mut table = elements::TableLayout::new(vec![2, 2, 3, 2, 4]);
        table.set_cell_decorator(elements::FrameCellDecorator::new(true, true, false));

        let style_bold = style::Style::new().bold();
        table
            .row()
            .element(elements::Paragraph::new("Data").styled(style_bold))
            .element(elements::Paragraph::new("Casco").styled(style_bold))
            .element(elements::Paragraph::new("Operador").styled(style_bold))
            .element(elements::Paragraph::new("Status").styled(style_bold))
            .element(elements::Paragraph::new("Observações").styled(style_bold))
            .push()
            .expect("Table error");

        for report in reports {
            let mut remarks: Vec<String> = report
                .items
                .0
                .iter()
                .filter(|item| item.status != ItemStatus::Baik)
                .map(|item| format!("{} ({})", item.label, item.status.label()))
                .collect();
            if let Some(lain) = &report.kerusakan_lain {
                if !lain.0.keterangan.trim().is_empty() {
                    remarks.push(format!("Lainnya: {}", lain.0.keterangan));
                }
            }
            let remarks = if remarks.is_empty() {
                "-".to_string()
            } else {
                remarks.join("; ")
            };

            table
                .row()
                .element(elements::Paragraph::new(
                    report.report_date.format("%d/%m/%Y").to_string(),
                ))
                .element(elements::Paragraph::new(report.vehicle_hull.clone()))
                .element(elements::Paragraph::new(report.operator_name.clone()))
                .element(elements::Paragraph::new(report.overall_status.label()))
                .element(elements::Paragraph::new(remarks))
                .push()
                .expect("Table row error");
        }

        doc.push(table);
        doc.push(elements::Break::new(1.5));

        doc.push(
            elements::Paragraph::new(format!("Total de checklists: {}", reports.len()))
                .styled(style::Style::new().bold().with_font_size(10)),
        );

        // Renderiza para buffer (memória)
        let mut buffer = Vec::new();
        doc.render(&mut buffer)
            .map_err(|e| AppError::PdfError(e.to_string()))?;

        Ok(buffer)
    }
}

use crate::models::{SearchCriteria, REGION};

fn yes_no(value: bool) -> &'static str {
    if value {
        "Sí"
    } else {
        "No"
    }
}

/// One line per criterion, interpolated into the recommendation prompt
///
/// Free text is inserted verbatim. The maximum distance is not part of it.
pub fn criteria_summary(criteria: &SearchCriteria) -> String {
    let other_locations = if criteria.other_locations.is_empty() {
        "Ninguna".to_string()
    } else {
        criteria.other_locations.join(", ")
    };

    let activities = criteria
        .activities
        .iter()
        .map(|a| a.label())
        .collect::<Vec<_>>()
        .join(", ");

    [
        format!("Sexo: {}", criteria.sex.label()),
        format!("Edad: {}", criteria.age),
        format!("Presupuesto anual: Q{}", criteria.budget),
        format!("Ubicación principal: {}", criteria.location.as_str()),
        format!("Otras ubicaciones de interés: {}", other_locations),
        format!("Bilingüe: {}", yes_no(criteria.bilingual)),
        format!("Transporte escolar: {}", yes_no(criteria.transport)),
        format!("Orientación religiosa: {}", criteria.religion.effective_label()),
        format!("Actividades extracurriculares: {}", activities),
    ]
    .join("\n")
}

/// Prompt asking the model for exactly three schools in the region
pub fn recommendation_prompt(criteria: &SearchCriteria) -> String {
    format!(
        "Basado en la siguiente información:\n{}\n\nrecomienda 3 colegios en el {} que se ajusten a estos criterios. \
         Presta especial atención a la ubicación preferida y proporciona opciones cercanas o en esa área. \
         Para cada colegio, proporciona una breve descripción, su ubicación específica dentro del departamento, \
         su orientación religiosa (si aplica), y por qué lo recomiendas.",
        criteria_summary(criteria),
        REGION,
    )
}

/// Web search query; the religion keyword is appended only when it matters
pub fn search_query(criteria: &SearchCriteria) -> String {
    let mut query = format!(
        "Mejores colegios en {}, {} para estudiantes de {} años",
        criteria.location_segment(),
        REGION,
        criteria.age,
    );

    if criteria.religion.is_factor() {
        query.push(' ');
        query.push_str(criteria.religion.effective_label());
    }

    query
}

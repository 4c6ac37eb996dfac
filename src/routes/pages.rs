use actix_web::{http::StatusCode, web, HttpResponse, Responder};
use validator::Validate;
use crate::core::ADVISORY_NOTE;
use crate::models::{
    domain::{MAX_AGE, MAX_BUDGET, MAX_DISTANCE_KM, MIN_AGE, MIN_BUDGET},
    Activity, ReligiousOrientation, SearchForm, SearchOutcome, Sex, MUNICIPALITIES,
};
use crate::routes::schools::AppState;

const TITLE: &str = "Buscador de Colegios en el Departamento de Guatemala";

/// Configure the browser-facing form routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg
        .route("/", web::get().to(search_form))
        .route("/buscar", web::post().to(submit_search));
}

/// Escape text for HTML bodies and attribute values
fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

fn page(body: &str) -> String {
    format!(
        "<!DOCTYPE html>\n<html lang=\"es\">\n<head><meta charset=\"utf-8\"><title>{title}</title></head>\n<body>\n<h1>{title}</h1>\n{body}\n<p>{note}</p>\n</body>\n</html>\n",
        title = TITLE,
        body = body,
        note = escape(ADVISORY_NOTE),
    )
}

fn html(status: StatusCode, body: String) -> HttpResponse {
    HttpResponse::build(status)
        .content_type("text/html; charset=utf-8")
        .body(body)
}

fn options<'a>(items: impl Iterator<Item = (&'a str, &'a str)>) -> String {
    items
        .map(|(value, label)| format!("<option value=\"{}\">{}</option>", escape(value), escape(label)))
        .collect::<Vec<_>>()
        .join("")
}

/// Search form markup
pub fn render_form() -> String {
    let municipalities = options(MUNICIPALITIES.iter().map(|m| (*m, *m)));
    let sexes = options(Sex::ALL.iter().map(|s| (s.key(), s.label())));
    let religions = options(
        ReligiousOrientation::KEYS
            .iter()
            .map(|k| (*k, ReligiousOrientation::key_label(k))),
    );
    let activities = Activity::ALL
        .iter()
        .map(|a| {
            format!(
                "<label><input type=\"checkbox\" name=\"activities\" value=\"{}\"> {}</label>",
                a.key(),
                escape(a.label())
            )
        })
        .collect::<Vec<_>>()
        .join("\n");

    format!(
        r#"<p>Por favor, responde las siguientes preguntas para ayudarte a encontrar el colegio ideal para tu hijo/a en el departamento de Guatemala.</p>
<form method="post" action="/buscar">
<label>Sexo del estudiante: <select name="sex">{sexes}</select></label>
<label>Edad del estudiante: <input type="number" name="age" min="{min_age}" max="{max_age}" value="6"></label>
<label>Presupuesto anual (en Quetzales): <input type="number" name="budget" min="{min_budget}" max="{max_budget}" step="1000" value="25000"></label>
<fieldset><legend>Tipo de ubicación:</legend>
<label><input type="radio" name="locationKind" value="municipality" checked> Municipio específico</label>
<label><input type="radio" name="locationKind" value="area"> Área general</label>
</fieldset>
<label>Selecciona el municipio: <select name="municipality">{municipalities}</select></label>
<label>Describe el área general: <input type="text" name="area" placeholder="zona 10"></label>
<label>Otras ubicaciones de interés (opcional): <select name="otherLocations" multiple>{municipalities}</select></label>
<label>Distancia máxima aceptable (en km): <input type="number" name="maxDistanceKm" min="0" max="{max_distance}" value="10"></label>
<label><input type="checkbox" name="bilingual"> ¿Buscas un colegio bilingüe?</label>
<label><input type="checkbox" name="transport"> ¿Necesitas servicio de transporte escolar?</label>
<label>Orientación religiosa preferida: <select name="religion">{religions}</select></label>
<label>Especifica la orientación religiosa: <input type="text" name="religionOther"></label>
<fieldset><legend>Actividades extracurriculares de interés:</legend>
{activities}
</fieldset>
<button type="submit">Buscar Colegios</button>
</form>"#,
        sexes = sexes,
        min_age = MIN_AGE,
        max_age = MAX_AGE,
        min_budget = MIN_BUDGET,
        max_budget = MAX_BUDGET,
        municipalities = municipalities,
        max_distance = MAX_DISTANCE_KM,
        religions = religions,
        activities = activities,
    )
}

/// Result page markup: recommendation text followed by one block per result
pub fn render_outcome(outcome: &SearchOutcome) -> String {
    let mut body = String::new();
    body.push_str("<h2>Recomendaciones de la IA:</h2>\n");
    body.push_str(&format!("<pre>{}</pre>\n", escape(&outcome.recommendations)));
    body.push_str("<h2>Resultados de búsqueda adicionales:</h2>\n");
    for block in &outcome.results {
        body.push_str(&format!(
            "<div class=\"result\"><p><strong>{}</strong></p><p>{}</p><p><a href=\"{}\">Más información</a></p><hr></div>\n",
            escape(&block.title),
            escape(&block.snippet),
            escape(&block.link),
        ));
    }
    body.push_str("<p><a href=\"/\">Nueva búsqueda</a></p>");
    body
}

fn render_error(message: &str) -> String {
    format!(
        "<h2>Error</h2>\n<p>{}</p>\n<p><a href=\"/\">Volver</a></p>",
        escape(message)
    )
}

async fn search_form() -> impl Responder {
    html(StatusCode::OK, page(&render_form()))
}

/// POST /buscar
async fn submit_search(
    state: web::Data<AppState>,
    form: web::Form<Vec<(String, String)>>,
) -> impl Responder {
    let criteria = match SearchForm::new(form.into_inner()).into_criteria() {
        Ok(criteria) => criteria,
        Err(e) => {
            tracing::info!("Rejected form submission: {}", e);
            return html(StatusCode::BAD_REQUEST, page(&render_error(&e.to_string())));
        }
    };

    if let Err(errors) = criteria.validate() {
        tracing::info!("Validation failed for form submission: field_errors={:?}", errors);
        return html(StatusCode::BAD_REQUEST, page(&render_error(&errors.to_string())));
    }

    match state.finder.find(&criteria).await {
        Ok(outcome) => html(StatusCode::OK, page(&render_outcome(&outcome))),
        Err(e) => {
            tracing::error!("School search failed: {}", e);
            html(
                StatusCode::BAD_GATEWAY,
                page(&render_error(&format!("No se pudo completar la búsqueda: {}", e))),
            )
        }
    }
}

use actix_web::HttpResponse;
use actix_web::Responder;
use actix_web::web;
use chip_dto::ApiError;
use chip_dto::ApiPayment;
use chip_dto::SettleBody;
use chip_dto::SettleForm;
use chip_settlement::Table;

const FORM: &str = r#"<!DOCTYPE html>
<html>
<head><meta charset="utf-8"><title>Settle up</title></head>
<body>
<form action="/calculate" method="post">
    <label for="start_blinds">Start blinds:</label>
    <input type="text" name="start_blinds" id="start_blinds"><br>
    <label for="end_blinds">End blinds:</label>
    <input type="text" name="end_blinds" id="end_blinds"><br>
    <label for="player_names">Player names (optional, comma-separated):</label>
    <input type="text" name="player_names" id="player_names"><br>
    <label for="big_blind">Big Blind size (optional, in euros):</label>
    <input type="text" name="big_blind" id="big_blind"><br>
    <input type="submit" value="Calculate">
</form>
</body>
</html>
"#;

pub async fn index() -> impl Responder {
    HttpResponse::Ok()
        .content_type("text/html; charset=utf-8")
        .body(FORM)
}
pub async fn health() -> impl Responder {
    HttpResponse::Ok().body("ok")
}
pub async fn calculate(form: web::Form<SettleForm>) -> impl Responder {
    respond(Table::try_from(form.into_inner()))
}
pub async fn settle(body: web::Json<SettleBody>) -> impl Responder {
    respond(Table::try_from(body.into_inner()))
}

fn respond(table: anyhow::Result<Table>) -> HttpResponse {
    match table.and_then(|t| t.settle().map_err(anyhow::Error::from)) {
        Err(e) => {
            log::warn!("rejected table: {}", e);
            HttpResponse::BadRequest().json(ApiError::from(e.to_string()))
        }
        Ok(payments) => {
            log::debug!("settled table with {} payments", payments.len());
            HttpResponse::Ok().json(
                payments
                    .into_iter()
                    .map(ApiPayment::from)
                    .collect::<Vec<ApiPayment>>(),
            )
        }
    }
}

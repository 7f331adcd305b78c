use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt};

use crate::app::request::{Request, Response, MUSHROOM_ADDED, MUSHROOM_REMOVED};
use crate::core::service::BasketService;
use crate::core::{Containment, EntityStore};
use crate::domain::model::{NewBasket, NewMushroom};
use crate::utils::error::Result;

/// Newline-delimited JSON session: one request per line in, one response
/// per line out. Failures are answered, never terminate the session; only
/// IO ends it.
pub struct Session<S: EntityStore + Containment> {
    service: BasketService<S>,
}

impl<S: EntityStore + Containment> Session<S> {
    pub fn new(service: BasketService<S>) -> Self {
        Self { service }
    }

    pub fn service(&self) -> &BasketService<S> {
        &self.service
    }

    pub fn dispatch(&self, request: Request) -> Response {
        match request {
            Request::CreateMushroom {
                name,
                edible,
                weight,
                fresh,
            } => self
                .service
                .create_mushroom(NewMushroom {
                    name,
                    edible,
                    weight,
                    fresh,
                })
                .map(Response::Mushroom)
                .unwrap_or_else(|e| Response::failure(&e)),

            Request::UpdateMushroom {
                id,
                name,
                edible,
                weight,
                fresh,
            } => self
                .service
                .update_mushroom(
                    id,
                    NewMushroom {
                        name,
                        edible,
                        weight,
                        fresh,
                    },
                )
                .map(Response::Mushroom)
                .unwrap_or_else(|e| Response::failure(&e)),

            Request::GetMushroom { id } => self
                .service
                .get_mushroom(id)
                .map(Response::Mushroom)
                .unwrap_or_else(|e| Response::failure(&e)),

            Request::CreateBasket { owner, capacity } => self
                .service
                .create_basket(NewBasket { owner, capacity })
                .map(Response::Basket)
                .unwrap_or_else(|e| Response::failure(&e)),

            Request::GetBasket { id } => self
                .service
                .get_basket(id)
                .map(Response::Basket)
                .unwrap_or_else(|e| Response::failure(&e)),

            Request::AddMushroomToBasket {
                basket_id,
                mushroom_id,
            } => self
                .service
                .add_mushroom_to_basket(basket_id, mushroom_id)
                .map(|()| Response::message(MUSHROOM_ADDED))
                .unwrap_or_else(|e| Response::failure(&e)),

            Request::RemoveMushroomFromBasket {
                basket_id,
                mushroom_id,
            } => self
                .service
                .remove_mushroom_from_basket(basket_id, mushroom_id)
                .map(|()| Response::message(MUSHROOM_REMOVED))
                .unwrap_or_else(|e| Response::failure(&e)),
        }
    }

    pub fn handle_line(&self, line: &str) -> Response {
        match serde_json::from_str::<Request>(line) {
            Ok(request) => self.dispatch(request),
            Err(e) => {
                tracing::warn!("malformed request line: {}", e);
                Response::Failure {
                    detail: format!("Malformed request: {}", e),
                }
            }
        }
    }

    /// Serves requests until the reader is exhausted. Blank lines are
    /// skipped without a response.
    pub async fn run<R, W>(&self, reader: R, mut writer: W) -> Result<()>
    where
        R: AsyncBufRead + Unpin,
        W: AsyncWrite + Unpin,
    {
        let mut lines = reader.lines();
        while let Some(line) = lines.next_line().await? {
            let line = line.trim();
            if line.is_empty() {
                continue;
            }
            let response = self.handle_line(line);
            let mut payload = serde_json::to_vec(&response)?;
            payload.push(b'\n');
            writer.write_all(&payload).await?;
            writer.flush().await?;
        }
        tracing::debug!("input exhausted, session over");
        Ok(())
    }
}

//! Device topology endpoints.

use std::sync::Arc;

use axum::{
    Json,
    extract::{Query, State},
    http::header,
    response::IntoResponse,
};
use folio_topology::ColorScale;
use folio_view::{HoverTarget, TopologyView};

use crate::dto::{PathQuery, PathResponse, SvgQuery, TopologyResponse};
use crate::error::ApiError;
use crate::state::AppState;

/// GET /api/topology - Nodes and couplings with display colors.
pub async fn get_topology(State(state): State<Arc<AppState>>) -> Json<TopologyResponse> {
    Json(TopologyResponse::from_topology(
        &state.topology,
        &ColorScale::topology(),
    ))
}

/// GET /api/topology/path - Minimum-hop route between two qubits.
pub async fn shortest_path(
    State(state): State<Arc<AppState>>,
    Query(query): Query<PathQuery>,
) -> Result<Json<PathResponse>, ApiError> {
    let path = state.topology.shortest_path(query.from, query.to)?;
    let via = if path.len() > 2 {
        path[1..path.len() - 1].to_vec()
    } else {
        Vec::new()
    };
    Ok(Json(PathResponse {
        from: query.from,
        to: query.to,
        hops: path.len() - 1,
        swaps: via.len(),
        adjacent: state.topology.are_adjacent(query.from, query.to),
        via,
        path,
    }))
}

/// GET /api/topology/svg - Rendered diagram for a selection and hover state.
pub async fn topology_svg(
    State(state): State<Arc<AppState>>,
    Query(query): Query<SvgQuery>,
) -> Result<impl IntoResponse, ApiError> {
    let mut view = TopologyView::new(state.topology.clone(), state.config.selection_capacity);
    if let Some(raw) = &query.selected {
        view.select_all(&parse_qubit_list(raw)?)?;
    }
    if let Some(raw) = &query.hover {
        view.hover_target(Some(parse_hover(raw)?))?;
    }
    let svg = view.render_svg(state.palette(query.theme));
    Ok(([(header::CONTENT_TYPE, "image/svg+xml")], svg))
}

/// Parse a comma-separated qubit list such as `0,5`.
pub(crate) fn parse_qubit_list(raw: &str) -> Result<Vec<u32>, ApiError> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(|s| {
            s.parse()
                .map_err(|_| ApiError::BadRequest(format!("Invalid qubit '{s}'")))
        })
        .collect()
}

/// Parse a hover target: `4` or `Q4` for a qubit, `5-9` or `Q5-Q9` for a coupling.
pub(crate) fn parse_hover(raw: &str) -> Result<HoverTarget, ApiError> {
    let qubit = |s: &str| -> Result<u32, ApiError> {
        let s = s.trim();
        s.strip_prefix(['Q', 'q'])
            .unwrap_or(s)
            .parse()
            .map_err(|_| ApiError::BadRequest(format!("Invalid hover target '{raw}'")))
    };
    match raw.split_once('-') {
        Some((from, to)) => Ok(HoverTarget::Edge {
            from: qubit(from)?,
            to: qubit(to)?,
        }),
        None => Ok(HoverTarget::Node { id: qubit(raw)? }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_qubit_list() {
        assert_eq!(parse_qubit_list("0,5").unwrap(), vec![0, 5]);
        assert_eq!(parse_qubit_list(" 3 , 4 ,").unwrap(), vec![3, 4]);
        assert!(parse_qubit_list("").unwrap().is_empty());
        assert!(matches!(
            parse_qubit_list("0,x"),
            Err(ApiError::BadRequest(_))
        ));
    }

    #[test]
    fn test_parse_hover() {
        assert_eq!(parse_hover("4").unwrap(), HoverTarget::Node { id: 4 });
        assert_eq!(parse_hover("Q4").unwrap(), HoverTarget::Node { id: 4 });
        assert_eq!(
            parse_hover("Q5-Q9").unwrap(),
            HoverTarget::Edge { from: 5, to: 9 }
        );
        assert_eq!(
            parse_hover("9-5").unwrap(),
            HoverTarget::Edge { from: 9, to: 5 }
        );
        assert!(matches!(parse_hover("5-"), Err(ApiError::BadRequest(_))));
        assert!(matches!(parse_hover("edge"), Err(ApiError::BadRequest(_))));
    }
}

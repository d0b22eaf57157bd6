//! The browser game: frame loop, pointer handlers and leaderboard sync

use crate::config::ClientConfig;
use crate::error::ClientError;
use crate::fsm::{FsmState, ShotAction, ShotFsm};
use crate::identity::{self, Identity};
use crate::input::{canvas_point, canvas_rect};
use crate::network;
use crate::renderer::Renderer;
use crate::scene::build_scene;
use crate::state::HudState;
use game_core::{Config, GameSession};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys::{Document, Element, HtmlCanvasElement};

/// State touched by both the frame loop and network tasks
struct Shared {
    hud: HudState,
    identity: Identity,
}

type SharedRef = Rc<RefCell<Shared>>;

/// HUD elements in the page; any of them may be missing
struct HudElements {
    document: Document,
    score: Option<Element>,
    best: Option<Element>,
    shots: Option<Element>,
    status: Option<Element>,
    leaderboard: Option<Element>,
}

impl HudElements {
    fn find(document: Document) -> Self {
        Self {
            score: document.get_element_by_id("score"),
            best: document.get_element_by_id("best"),
            shots: document.get_element_by_id("shots"),
            status: document.get_element_by_id("status"),
            leaderboard: document.get_element_by_id("leaderboard"),
            document,
        }
    }

    fn render(&self, hud: &HudState, my_user_id: Option<&str>) {
        if let Some(el) = &self.score {
            el.set_text_content(Some(&hud.score().to_string()));
        }
        if let Some(el) = &self.best {
            el.set_text_content(Some(&hud.best_label()));
        }
        if let Some(el) = &self.shots {
            el.set_text_content(Some(&hud.shots_label()));
        }
        if let Some(el) = &self.status {
            el.set_text_content(Some(hud.status()));
        }
        if let Some(list) = &self.leaderboard {
            list.set_inner_html("");
            for row in hud.rows(my_user_id) {
                let Ok(li) = self.document.create_element("li") else {
                    continue;
                };
                li.set_text_content(Some(&format!("{}  {}", row.name, row.score)));
                if row.is_me {
                    let _ = li.set_attribute("class", "me");
                }
                let _ = list.append_child(&li);
            }
        }
    }
}

#[wasm_bindgen]
pub struct HoopClient {
    renderer: Renderer,
    session: GameSession,
    fsm: ShotFsm,
    canvas: HtmlCanvasElement,
    config: Rc<ClientConfig>,
    shared: SharedRef,
    dom: HudElements,
    last_frame_ms: Option<f64>,
}

/// Create the client on `canvas`, talking to the worker at `api_base`
#[wasm_bindgen]
pub async fn start(canvas: HtmlCanvasElement, api_base: String) -> Result<HoopClient, JsValue> {
    console_error_panic_hook::set_once();
    // A second start() on the same page keeps the first logger
    let _ = console_log::init_with_level(log::Level::Info);

    let session = GameSession::new(Config::new()).map_err(ClientError::from)?;
    let court_size = (session.config().canvas_width, session.config().canvas_height);
    let renderer = Renderer::new(canvas.clone(), court_size)
        .await
        .map_err(ClientError::Graphics)?;

    let document = web_sys::window()
        .and_then(|w| w.document())
        .ok_or(ClientError::NoWindow)?;

    let client = HoopClient {
        renderer,
        session,
        fsm: ShotFsm::new(),
        canvas,
        config: Rc::new(ClientConfig::new(&api_base)),
        shared: Rc::new(RefCell::new(Shared {
            hud: HudState::new(),
            identity: identity::load(),
        })),
        dom: HudElements::find(document),
        last_frame_ms: None,
    };

    log::info!("Hoopshot client started against {:?}", client.config.api_base);
    spawn_sign_in(client.config.clone(), client.shared.clone());
    Ok(client)
}

#[wasm_bindgen]
impl HoopClient {
    /// Advance the simulation to `now_ms` and draw. Called once per animation frame
    pub fn frame(&mut self, now_ms: f64) -> Result<(), JsValue> {
        let dt = match self.last_frame_ms {
            Some(last) => ((now_ms - last) / 1000.0) as f32,
            None => 0.0,
        };
        self.last_frame_ms = Some(now_ms);

        let events = self.session.advance(dt);

        if events.launched || events.scored {
            self.shared.borrow_mut().hud.set_shots(self.session.stats());
        }
        if events.scored {
            self.fsm.transition(ShotAction::Scored);
            self.on_basket();
        } else if events.settled {
            self.fsm.transition(ShotAction::Settled);
        }

        let scene = build_scene(&self.session);
        self.renderer.draw(&scene).map_err(ClientError::Graphics)?;

        self.refresh_hud();
        Ok(())
    }

    pub fn pointer_down(&mut self, client_x: f32, client_y: f32) {
        if !self.fsm.can_transition(ShotAction::PointerDown) {
            return;
        }
        let point = self.to_canvas(client_x, client_y);
        if self.session.pointer_down(point) {
            self.fsm.transition(ShotAction::PointerDown);
        }
    }

    pub fn pointer_move(&mut self, client_x: f32, client_y: f32) {
        if self.fsm.state() == FsmState::Dragging {
            let point = self.to_canvas(client_x, client_y);
            self.session.pointer_move(point);
        }
    }

    pub fn pointer_up(&mut self, client_x: f32, client_y: f32) {
        if self.fsm.state() != FsmState::Dragging {
            return;
        }
        let point = self.to_canvas(client_x, client_y);
        match self.session.pointer_up(point) {
            Some(_) => {
                self.fsm.transition(ShotAction::Launch);
            }
            None => {
                self.fsm.transition(ShotAction::CancelDrag);
            }
        }
    }

    pub fn pointer_cancel(&mut self) {
        self.session.cancel_drag();
        self.fsm.transition(ShotAction::CancelDrag);
    }

    /// Score back to zero and the ball back to the free-throw spot
    pub fn reset(&mut self) {
        self.session.reset();
        self.fsm.transition(ShotAction::Reset);
        let mut shared = self.shared.borrow_mut();
        shared.hud.set_score(0);
        shared.hud.set_shots(self.session.stats());
        shared.hud.set_status("Ready");
        log::info!("Game reset");
    }

    pub fn set_player_name(&mut self, name: String) {
        let mut shared = self.shared.borrow_mut();
        shared.identity.player_name = name;
        if let Err(e) = identity::save(&shared.identity) {
            log::warn!("Could not save player name: {}", e);
        }
        shared.hud.mark_dirty();
    }

    pub fn player_name(&self) -> String {
        self.shared.borrow().identity.player_name.clone()
    }

    pub fn state(&self) -> FsmState {
        self.fsm.state()
    }

    pub fn score(&self) -> u32 {
        self.session.score()
    }
}

impl HoopClient {
    fn to_canvas(&self, client_x: f32, client_y: f32) -> glam::Vec2 {
        let config = self.session.config();
        canvas_point(
            client_x,
            client_y,
            canvas_rect(&self.canvas),
            config.canvas_width,
            config.canvas_height,
        )
    }

    fn on_basket(&mut self) {
        let score = self.session.score();
        let submit = {
            let mut shared = self.shared.borrow_mut();
            shared.hud.set_score(score);
            if !shared.hud.should_submit() {
                None
            } else {
                match shared.identity.user_id.clone() {
                    Some(user_id) => Some((user_id, shared.identity.display_name())),
                    None => {
                        shared.hud.set_status(ClientError::NotSignedIn.to_string());
                        None
                    }
                }
            }
        };

        if let Some((user_id, name)) = submit {
            log::info!("Submitting score {} for {}", score, user_id);
            match network::create_submit_message(&user_id, &name, score) {
                Ok(body) => spawn_rpc(self.config.clone(), self.shared.clone(), body),
                Err(e) => report(&self.shared, "Score not saved", e),
            }
        }
    }

    fn refresh_hud(&self) {
        let mut shared = self.shared.borrow_mut();
        if shared.hud.take_dirty() {
            self.dom
                .render(&shared.hud, shared.identity.user_id.as_deref());
        }
    }
}

fn report(shared: &SharedRef, context: &str, err: ClientError) {
    log::error!("{}: {}", context, err);
    shared
        .borrow_mut()
        .hud
        .set_status(format!("{}: {}", context, err));
}

/// Confirm or mint the anonymous identity, then load best score and leaderboard
fn spawn_sign_in(config: Rc<ClientConfig>, shared: SharedRef) {
    spawn_local(async move {
        let existing = shared.borrow().identity.user_id.clone();
        let response = match network::request_identity(&config, existing.as_deref()).await {
            Ok(response) => response,
            Err(e) => {
                report(&shared, "Sign-in failed", e);
                // The leaderboard is public; show it anyway
                refresh_leaderboard(&config, &shared).await;
                return;
            }
        };

        let user_id = response.user_id.clone();
        {
            let mut s = shared.borrow_mut();
            s.identity.user_id = Some(response.user_id);
            if let Err(e) = identity::save(&s.identity) {
                log::warn!("Could not save identity: {}", e);
            }
            s.hud.set_status("Ready");
        }
        log::info!(
            "Signed in as {} ({})",
            user_id,
            if response.fresh { "new" } else { "returning" }
        );

        match network::create_fetch_best_message(&user_id) {
            Ok(body) => exchange(&config, &shared, body).await,
            Err(e) => report(&shared, "Could not load best score", e),
        }
        refresh_leaderboard(&config, &shared).await;
    });
}

fn spawn_rpc(config: Rc<ClientConfig>, shared: SharedRef, body: Vec<u8>) {
    spawn_local(async move {
        exchange(&config, &shared, body).await;
    });
}

/// One RPC round trip applied to the HUD. Follows up with a leaderboard
/// fetch when the stored best changed
async fn exchange(config: &ClientConfig, shared: &SharedRef, body: Vec<u8>) {
    let refresh = match network::rpc(config, body).await {
        Ok(reply) => {
            let result = network::handle_message(reply, &mut shared.borrow_mut().hud);
            match result {
                Ok(refresh) => refresh,
                Err(e) => {
                    report(shared, "Leaderboard", e);
                    false
                }
            }
        }
        Err(e) => {
            report(shared, "Network", e);
            false
        }
    };

    if refresh {
        refresh_leaderboard(config, shared).await;
    }
}

async fn refresh_leaderboard(config: &ClientConfig, shared: &SharedRef) {
    let body = match network::create_leaderboard_message(config.leaderboard_limit) {
        Ok(body) => body,
        Err(e) => {
            report(shared, "Leaderboard", e);
            return;
        }
    };

    match network::rpc(config, body).await {
        Ok(reply) => {
            let result = network::handle_message(reply, &mut shared.borrow_mut().hud);
            if let Err(e) = result {
                report(shared, "Leaderboard", e);
            }
        }
        Err(e) => report(shared, "Leaderboard", e),
    }
}

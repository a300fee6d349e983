impl<IN> CardStack<IN>
where
    IN: InputProvider,
{
    pub fn new(config: StackConfig, input: IN) -> Result<Self, ConfigError> {
        config.validate()?;

        debug!(
            "deck: init items={} window={} threshold_px={}",
            config.item_count, config.window_size, config.swipe_threshold_px
        );

        Ok(Self {
            input,
            labels: LabelStore::new(config.item_count),
            flash: Transient::new(config.flash_ms),
            config,
            current: 0,
            generation: 0,
            gesture: GestureTracker::new(),
            keymap: KeyBindingMap::new(),
            ui: UiState::Deck,
            pending_redraw: true,
            transition: None,
        })
    }

    /// Drains pending input, fires due flash expiries and reports whether the
    /// host should redraw.
    pub fn tick(&mut self, now_ms: u64) -> TickResult {
        self.process_inputs(now_ms);

        if self.flash.tick(now_ms) {
            self.pending_redraw = true;
        }

        let rendered = if self.pending_redraw {
            self.pending_redraw = false;
            TickResult::RenderRequested
        } else {
            TickResult::NoRender
        };

        if self.transition_frame(now_ms).is_some() {
            TickResult::RenderRequested
        } else {
            rendered
        }
    }

    /// Commits `label` to the front card and moves to the next one. The exit
    /// animation and the label flash start at `now_ms`.
    ///
    /// Returns `false` without touching anything once the deck is exhausted.
    pub fn advance(&mut self, label: Label, now_ms: u64) -> bool {
        let index = self.current;
        if let Err(err) = self.labels.set(index, label) {
            debug!("deck: advance ignored, {}", err);
            return false;
        }

        self.current = index + 1;
        self.bump_generation();

        self.flash.set(LabelFlash { index, label }, now_ms);
        let direction = ExitDirection::from_label(label);
        self.start_transition(direction.into(), now_ms, self.config.exit_anim_ms);
        self.pending_redraw = true;

        debug!(
            "deck: commit index={} label={:?} exit={:?} -> {}/{}",
            index,
            self.config.categories.text(label),
            direction,
            self.current,
            self.labels.len()
        );
        true
    }

    /// Moves back to the previous card, keeping its stored label. Any label
    /// flash is dismissed.
    pub fn step_back(&mut self, now_ms: u64) -> bool {
        let Some(previous) = self.current.checked_sub(1) else {
            debug!("deck: step back ignored at start");
            return false;
        };

        self.current = previous;
        self.bump_generation();
        self.flash.clear();
        self.start_transition(AnimationKind::Return, now_ms, ANIM_RETURN_MS);
        self.pending_redraw = true;

        debug!(
            "deck: step back -> {}/{}",
            self.current,
            self.labels.len()
        );
        true
    }

    pub fn apply(&mut self, action: DeckAction, now_ms: u64) -> bool {
        match action {
            DeckAction::Choose(side) => self.advance(Label::Category(side), now_ms),
            DeckAction::Skip => self.advance(Label::Unlabeled, now_ms),
            DeckAction::StepBack => self.step_back(now_ms),
        }
    }

    fn bump_generation(&mut self) {
        self.generation = self.generation.wrapping_add(1);
    }

    fn start_transition(&mut self, kind: AnimationKind, now_ms: u64, duration_ms: u16) {
        self.transition = Some(AnimationSpec::new(kind, now_ms, duration_ms));
    }

    fn transition_frame(&self, now_ms: u64) -> Option<AnimationFrame> {
        self.transition.and_then(|spec| spec.frame(now_ms))
    }

    fn set_fault(&mut self, line1: &'static str, line2: &'static str) {
        warn!("deck: fault {} / {}", line1, line2);
        let _ = self.gesture.release();
        self.ui = UiState::Fault { line1, line2 };
        self.pending_redraw = true;
    }
}

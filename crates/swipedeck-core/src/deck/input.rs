impl<IN> CardStack<IN>
where
    IN: InputProvider,
{
    fn process_inputs(&mut self, now_ms: u64) {
        loop {
            match self.input.poll_event() {
                Ok(Some(event)) => {
                    let _ = self.handle_event(event, now_ms);
                }
                Ok(None) => break,
                Err(_) => {
                    self.set_fault("INPUT ERROR", "CHECK PROVIDER");
                    break;
                }
            }
        }
    }

    /// Applies one event immediately. Events pushed here and events polled
    /// from the input port go through the same path.
    pub fn handle_event(&mut self, event: InputEvent, now_ms: u64) -> EventOutcome {
        if let UiState::Fault { .. } = self.ui {
            return self.apply_fault_input(event);
        }

        match event {
            InputEvent::GestureStart { x } => {
                self.gesture.start(x, self.generation);
                self.pending_redraw = true;
                EventOutcome::Consumed
            }
            InputEvent::GestureMove { x } => {
                if !self.gesture.is_dragging() {
                    return EventOutcome::Ignored;
                }
                self.gesture.update(x);
                self.pending_redraw = true;
                EventOutcome::Consumed
            }
            InputEvent::GestureEnd | InputEvent::GestureCancel => self.finish_gesture(now_ms),
            InputEvent::KeyDown { key, repeat } => match self.keymap.resolve(key, repeat) {
                KeyResolution::Action(action) => {
                    self.apply(action, now_ms);
                    EventOutcome::Consumed
                }
                KeyResolution::Suppressed => EventOutcome::Consumed,
                KeyResolution::Passthrough => EventOutcome::Ignored,
            },
            InputEvent::Choose(side) => {
                self.apply(DeckAction::Choose(side), now_ms);
                EventOutcome::Consumed
            }
        }
    }

    fn finish_gesture(&mut self, now_ms: u64) -> EventOutcome {
        let Some(release) = self.gesture.release() else {
            return EventOutcome::Ignored;
        };
        // The offset disappears either way, so the card snaps back or leaves.
        self.pending_redraw = true;

        if release.origin != self.generation {
            debug!(
                "gesture: stale release dx={} origin={} generation={}",
                release.dx, release.origin, self.generation
            );
            return EventOutcome::Consumed;
        }

        match swipe_decision(release.dx, self.config.swipe_threshold_px) {
            Some(side) => {
                self.advance(Label::Category(side), now_ms);
            }
            None => {
                debug!(
                    "gesture: discarded dx={} threshold_px={}",
                    release.dx, self.config.swipe_threshold_px
                );
            }
        }
        EventOutcome::Consumed
    }

    fn apply_fault_input(&mut self, event: InputEvent) -> EventOutcome {
        let acknowledged = match event {
            InputEvent::Choose(_) => true,
            InputEvent::KeyDown { key, repeat } => {
                matches!(self.keymap.resolve(key, repeat), KeyResolution::Action(_))
            }
            InputEvent::GestureStart { .. }
            | InputEvent::GestureMove { .. }
            | InputEvent::GestureEnd
            | InputEvent::GestureCancel => false,
        };

        if !acknowledged {
            return EventOutcome::Ignored;
        }

        debug!("deck: fault acknowledged at {}/{}", self.current, self.labels.len());
        self.ui = UiState::Deck;
        self.pending_redraw = true;
        EventOutcome::Consumed
    }
}

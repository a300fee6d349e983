impl<IN> CardStack<IN>
where
    IN: InputProvider,
{
    pub fn current_index(&self) -> usize {
        self.current
    }

    pub fn item_count(&self) -> usize {
        self.labels.len()
    }

    pub fn window_size(&self) -> usize {
        self.config.window_size
    }

    pub fn is_exhausted(&self) -> bool {
        self.current >= self.labels.len()
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn categories(&self) -> &Categories {
        &self.config.categories
    }

    pub fn labels(&self) -> &LabelStore {
        &self.labels
    }

    pub fn label_at(&self, index: usize) -> Result<Label, IndexOutOfRange> {
        self.labels.get(index)
    }

    /// Horizontal offset of the front card while a drag is open.
    pub fn live_offset(&self) -> Option<f32> {
        self.gesture.dx()
    }

    pub fn is_faulted(&self) -> bool {
        matches!(self.ui, UiState::Fault { .. })
    }

    /// Cards to paint, back to front.
    ///
    /// Upcoming cards come first with the front card last among them; when a
    /// card has already been decided, it is appended after the front card with
    /// its exit direction. Empty once no upcoming cards remain. Recomputed on
    /// every call from the pointer, the stored labels and the open drag.
    pub fn window(&self) -> Window {
        let remaining = self.labels.len().saturating_sub(self.current);
        let visible = self.config.window_size.min(remaining);
        if visible == 0 {
            return Window::new();
        }

        let mut slots = Window::with_capacity(visible + 1);

        let live_offset = self.gesture.dx();
        for index in (self.current..self.current + visible).rev() {
            let is_front = index == self.current;
            let slot = CardSlot {
                index,
                paint_order: slots.len(),
                is_front,
                exit_direction: None,
                live_offset: if is_front { live_offset } else { None },
            };
            slots.push(slot);
        }

        if let Some(dismissed) = self.dismissed_slot(slots.len()) {
            slots.push(dismissed);
        }

        slots
    }

    fn dismissed_slot(&self, paint_order: usize) -> Option<CardSlot> {
        let index = self.current.checked_sub(1)?;
        let label = self.labels.get(index).ok()?;

        Some(CardSlot {
            index,
            paint_order,
            is_front: false,
            exit_direction: Some(ExitDirection::from_label(label)),
            live_offset: None,
        })
    }

    pub fn with_screen<F>(&self, now_ms: u64, f: F)
    where
        F: FnOnce(Screen<'_>),
    {
        let animation = self.transition_frame(now_ms);

        match self.ui {
            UiState::Fault { line1, line2 } => f(Screen::Fault { line1, line2 }),
            UiState::Deck => {
                let slots = self.window();
                let flash = self.flash.get().copied();
                let tally = self.labels.tally();

                if slots.is_empty() {
                    f(Screen::Exhausted {
                        message: EXHAUSTED_MESSAGE,
                        last: self.dismissed_slot(0),
                        total: self.labels.len(),
                        tally,
                        flash,
                        animation,
                    });
                } else {
                    f(Screen::Deck {
                        slots: &slots,
                        categories: &self.config.categories,
                        position: self.current,
                        total: self.labels.len(),
                        tally,
                        flash,
                        animation,
                    });
                }
            }
        }
    }

    pub fn render_to<R>(&self, now_ms: u64, renderer: &mut R) -> Result<(), R::Error>
    where
        R: DeckRenderer,
    {
        let mut result = Ok(());
        self.with_screen(now_ms, |screen| result = renderer.render(&screen));
        result
    }

    pub fn with_input_mut<R, F>(&mut self, f: F) -> R
    where
        F: FnOnce(&mut IN) -> R,
    {
        f(&mut self.input)
    }

    /// Tears the deck down and hands the input port back to the host.
    pub fn into_input(self) -> IN {
        self.input
    }
}

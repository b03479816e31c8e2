
/*
* transfer one diamond to the recipient, sender is the tx main address
*/
action_define!{ DiamondTransfer, 5, false, [],
    {
        diamond : DiamondName
        to      : Address
    },
    (self, ctx),
    {
        let from = ctx.env().tx.main;
        let mut state = CoreState::wrap(ctx.state());
        hacd_move_one_diamond(&mut state, &from, &self.to, &self.diamond)?;
        hacd_sub(&mut state, &from, &DiamondNumber::from(1))?;
        hacd_add(&mut state, &self.to, &DiamondNumber::from(1))?;
        Ok(())
    },
    {
        let from = ctx.env().tx.main;
        let mut state = CoreState::wrap(ctx.state());
        let mut diaitem = must_have!(
            format!("diamond {}", self.diamond.to_readable()),
            state.diamond(&self.diamond));
        diaitem.address = from;
        state.diamond_set(&self.diamond, &diaitem);
        hacd_add(&mut state, &from, &DiamondNumber::from(1))?;
        hacd_sub(&mut state, &self.to, &DiamondNumber::from(1))?;
        Ok(())
    }
}


/*
* batch transfer, fee paid outside the diamond owner, needs the from signature
*/
action_define!{ DiamondQuantityTransfer, 6, false, [self.from],
    {
        from     : Address
        to       : Address
        diamonds : DiamondNameListMax255
    },
    (self, ctx),
    {
        let dianum = self.diamonds.check()?;
        let mut state = CoreState::wrap(ctx.state());
        for dia in self.diamonds.list() {
            hacd_move_one_diamond(&mut state, &self.from, &self.to, dia)?;
        }
        hacd_sub(&mut state, &self.from, &DiamondNumber::from(dianum as u32))?;
        hacd_add(&mut state, &self.to, &DiamondNumber::from(dianum as u32))?;
        Ok(())
    },
    {
        let dianum = self.diamonds.length();
        let mut state = CoreState::wrap(ctx.state());
        for dia in self.diamonds.list() {
            let mut diaitem = must_have!(
                format!("diamond {}", dia.to_readable()),
                state.diamond(dia));
            diaitem.address = self.from;
            state.diamond_set(dia, &diaitem);
        }
        hacd_add(&mut state, &self.from, &DiamondNumber::from(dianum as u32))?;
        hacd_sub(&mut state, &self.to, &DiamondNumber::from(dianum as u32))?;
        Ok(())
    }
}

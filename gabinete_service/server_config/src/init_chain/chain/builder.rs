/*
 * Copyright (c) Huawei Technologies Co., Ltd. 2025. All rights reserved.
 * Global Trust Authority is licensed under the Mulan PSL v2.
 * You can use this software according to the terms and conditions of the Mulan PSL v2.
 * You may obtain a copy of Mulan PSL v2 at:
 *     http://license.coscl.org.cn/MulanPSL2
 * THIS SOFTWARE IS PROVIDED ON AN "AS IS" BASIS, WITHOUT WARRANTIES OF ANY KIND, EITHER EXPRESS OR
 * IMPLIED, INCLUDING BUT NOT LIMITED TO NON-INFRINGEMENT, MERCHANTABILITY OR FIT FOR A PARTICULAR
 * PURPOSE.
 * See the Mulan PSL v2 for more details.
 */

use crate::init_chain::traits::{InitContext, InitHandler};

#[derive(Debug)]
pub struct InitChain {
    first_handler: Option<Box<dyn InitHandler>>,
}

impl InitChain {
    /// Runs every handler in order.
    ///
    /// # Errors
    /// Returns the message of the first handler that fails; later handlers do not run.
    pub async fn execute(&self, context: &mut InitContext) -> Result<(), String> {
        match &self.first_handler {
            Some(handler) => handler.handle(context).await,
            None => Ok(()),
        }
    }

    pub fn builder() -> InitChainBuilder {
        InitChainBuilder::new()
    }
}

#[derive(Default)]
pub struct InitChainBuilder {
    handlers: Vec<Box<dyn InitHandler>>,
}

impl InitChainBuilder {
    pub fn new() -> Self {
        InitChainBuilder { handlers: Vec::new() }
    }

    pub fn add_handler<H: InitHandler + 'static>(mut self, handler: H) -> Self {
        self.handlers.push(Box::new(handler));
        self
    }

    /// Links the handlers so each one forwards to the handler added after it.
    pub fn build(self) -> InitChain {
        let first_handler = self.handlers.into_iter().rev().fold(
            None,
            |next: Option<Box<dyn InitHandler>>, mut handler| {
                if let Some(next) = next {
                    handler.set_next(next);
                }
                Some(handler)
            },
        );
        InitChain { first_handler }
    }
}

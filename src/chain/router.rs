use crate::entity::SwapPair;
use alloy::network::TransactionBuilder;
use alloy::primitives::aliases::U24;
use alloy::primitives::{Address, Bytes, U160, U256};
use alloy::rpc::types::eth::TransactionRequest;
use alloy::sol;
use alloy::sol_types::SolCall;

sol! {
    /// Subset of the SwapRouter02 interface used by ZenithFinance and FaroSwap
    interface ISwapRouter {
        struct ExactInputSingleParams {
            address tokenIn;
            address tokenOut;
            uint24 fee;
            address recipient;
            uint256 amountIn;
            uint256 amountOutMinimum;
            uint160 sqrtPriceLimitX96;
        }

        function exactInputSingle(ExactInputSingleParams calldata params)
            external
            payable
            returns (uint256 amountOut);

        function multicall(uint256 deadline, bytes[] calldata data)
            external
            payable
            returns (bytes[] memory results);
    }
}

/// Everything needed to build one router call
#[derive(Debug, Clone, Copy)]
pub struct SwapCall {
    pub router: Address,
    pub pair: SwapPair,
    pub fee_tier: u32,
    pub recipient: Address,
    pub amount_in: U256,
    pub deadline: u64,
}

/// Encode a single-hop exact-input swap.
///
/// `amountOutMinimum` is zero: any output amount is accepted.
pub fn encode_exact_input_single(
    pair: &SwapPair,
    fee_tier: u32,
    recipient: Address,
    amount_in: U256,
) -> Bytes {
    ISwapRouter::exactInputSingleCall {
        params: ISwapRouter::ExactInputSingleParams {
            tokenIn: pair.token_in.address,
            tokenOut: pair.token_out.address,
            fee: U24::from(fee_tier),
            recipient,
            amountIn: amount_in,
            amountOutMinimum: U256::ZERO,
            sqrtPriceLimitX96: U160::ZERO,
        },
    }
    .abi_encode()
    .into()
}

/// Wrap pre-encoded router calls in `multicall(deadline, data)`
pub fn encode_multicall(deadline: u64, calls: Vec<Bytes>) -> Bytes {
    ISwapRouter::multicallCall {
        deadline: U256::from(deadline),
        data: calls,
    }
    .abi_encode()
    .into()
}

/// Build the router transaction. Value is attached only when paying with the native token,
/// ERC-20 inputs rely on an existing allowance.
pub fn swap_request(call: &SwapCall, nonce: u64) -> TransactionRequest {
    let exact_input =
        encode_exact_input_single(&call.pair, call.fee_tier, call.recipient, call.amount_in);
    let calldata = encode_multicall(call.deadline, vec![exact_input]);

    let request = TransactionRequest::default()
        .with_to(call.router)
        .with_input(calldata)
        .with_nonce(nonce);

    if call.pair.token_in.is_native {
        request.with_value(call.amount_in)
    } else {
        request
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chain::tokens::constants::{PHRS, USDC, USDT, ZENITH_FINANCE};
    use alloy::primitives::{address, TxKind};

    const WALLET: Address = address!("f39fd6e51aad88f6f4ce6ab8827279cfffb92266");

    fn call(pair: SwapPair) -> SwapCall {
        SwapCall {
            router: ZENITH_FINANCE.router,
            pair,
            fee_tier: 3000,
            recipient: WALLET,
            amount_in: U256::from(7_000_000_000_000_000u64),
            deadline: 1_700_000_600,
        }
    }

    #[test]
    fn multicall_wraps_exact_input_single() {
        let swap = call(SwapPair::new(PHRS, USDT));
        let request = swap_request(&swap, 42);

        let input = request.input.input().cloned().unwrap_or_default();
        let multicall = ISwapRouter::multicallCall::abi_decode(&input).unwrap();
        assert_eq!(multicall.deadline, U256::from(1_700_000_600u64));
        assert_eq!(multicall.data.len(), 1);

        let inner = ISwapRouter::exactInputSingleCall::abi_decode(&multicall.data[0]).unwrap();
        let params = inner.params;
        assert_eq!(params.tokenIn, PHRS.address);
        assert_eq!(params.tokenOut, USDT.address);
        assert_eq!(params.fee, U24::from(3000u32));
        assert_eq!(params.recipient, WALLET);
        assert_eq!(params.amountIn, swap.amount_in);
        assert_eq!(params.amountOutMinimum, U256::ZERO);
        assert_eq!(params.sqrtPriceLimitX96, U160::ZERO);
    }

    #[test]
    fn native_input_attaches_value() {
        let swap = call(SwapPair::new(PHRS, USDC));
        let request = swap_request(&swap, 7);

        assert_eq!(request.to, Some(TxKind::Call(ZENITH_FINANCE.router)));
        assert_eq!(request.value, Some(swap.amount_in));
        assert_eq!(request.nonce, Some(7));
    }

    #[test]
    fn token_input_attaches_no_value() {
        let swap = call(SwapPair::new(USDC, USDT));
        let request = swap_request(&swap, 8);

        assert_eq!(request.value, None);
        assert_eq!(request.nonce, Some(8));
    }
}
